//! Verlauf der auf eine Loch-Session angewendeten Commands.
//!
//! Jede Mutation läuft als `SessionCommand` durch den Gesten-Controller und
//! wird hier mitgeschrieben, auch wenn sie nichts verändert hat (z. B. ein
//! verworfener Schlag am Limit). Beim Lochwechsel wird der Verlauf geleert.

use std::collections::VecDeque;

use super::SessionCommand;

/// Maximale Anzahl gemerkter Commands; darüber fällt der älteste heraus.
pub const COMMAND_LOG_CAPACITY: usize = 512;

/// Ringpuffer der zuletzt angewendeten Commands (älteste zuerst).
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: VecDeque<SessionCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt einen angewendeten Command.
    pub fn record(&mut self, command: &SessionCommand) {
        if self.commands.len() >= COMMAND_LOG_CAPACITY {
            self.commands.pop_front();
        }
        log::debug!("Session-Command: {:?}", command);
        self.commands.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in Ausführungsreihenfolge.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SessionCommand> + '_ {
        self.commands.iter()
    }

    /// Zuletzt angewendeter Command.
    pub fn last(&self) -> Option<&SessionCommand> {
        self.commands.back()
    }

    /// Vergisst den Verlauf (Lochwechsel).
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_command_falls_out_when_full() {
        let mut log = CommandLog::new();
        for index in 0..COMMAND_LOG_CAPACITY {
            log.record(&SessionCommand::SelectShot { index });
        }
        assert_eq!(log.len(), COMMAND_LOG_CAPACITY);

        log.record(&SessionCommand::ClearProjection);

        assert_eq!(log.len(), COMMAND_LOG_CAPACITY);
        assert_eq!(
            log.iter().next(),
            Some(&SessionCommand::SelectShot { index: 1 })
        );
        assert_eq!(log.last(), Some(&SessionCommand::ClearProjection));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut log = CommandLog::new();
        log.record(&SessionCommand::ClearMeasurement);
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }
}
