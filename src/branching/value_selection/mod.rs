//! Provides the [`ValueSelector`] trait which is required
//! for value selectors to implement; the main method in this trait relies on
//! [`ValueSelector::select_value`].
//!
//! Furthermore, it defines the implementations [`InDomainMax`] and [`InDomainMin`]. Any
//! [`ValueSelector`] returns a literal over the provided variable; its negation is explored when
//! the search backtracks.

mod in_domain_max;
mod in_domain_min;
mod value_selector;

pub use in_domain_max::*;
pub use in_domain_min::*;
pub use value_selector::ValueSelector;
