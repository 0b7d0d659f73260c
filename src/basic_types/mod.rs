mod constraint_operation_error;
mod propagation_status;
mod search_execution_flag;
pub(crate) mod statistic_logging;

pub use constraint_operation_error::ConstraintOperationError;
pub use propagation_status::Inconsistency;
pub(crate) use propagation_status::PropagationStatus;
pub(crate) use search_execution_flag::SearchExecutionFlag;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
