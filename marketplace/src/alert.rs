//! Blocking, user-visible notices.

/// Message shown when the collection has no deployment on the connected
/// network.
pub const CONTRACT_NOT_DEPLOYED: &str = "Smart contract not deployed";

/// Surface for notices the user must see, as opposed to log output.
pub trait Alert {
    /// Shows `message` to the user.
    fn alert(&self, message: &str);
}

/// Writes alerts to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::Alert;

    /// Records every alert it receives.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingAlert {
        pub(crate) messages: Mutex<Vec<String>>,
    }

    impl RecordingAlert {
        pub(crate) fn messages(&self) -> Vec<String> {
            self.messages.lock().expect("should lock alert messages").clone()
        }
    }

    impl Alert for RecordingAlert {
        fn alert(&self, message: &str) {
            self.messages
                .lock()
                .expect("should lock alert messages")
                .push(message.to_owned());
        }
    }
}
