use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use signal_hook::consts::SIGINT;

use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the process receives SIGINT. Clones observe
/// the same flag.
#[derive(Clone, Debug)]
pub struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Registers the SIGINT handler.
    pub fn install() -> std::io::Result<OsSignal> {
        let signal_received = Arc::new(AtomicBool::new(false));
        let _ = signal_hook::flag::register(SIGINT, Arc::clone(&signal_received))?;

        Ok(OsSignal { signal_received })
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}
