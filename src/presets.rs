//! Built-in puzzles.

use crate::errors::BuildError;
use crate::session::{Session, SessionConfig};

/// A ready-made puzzle: grid rows, target words and the message revealed on
/// completion.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub words: &'static [&'static str],
    pub secret_message: &'static str,
}

impl Preset {
    /// The preset's rows joined with newlines, in the format
    /// [`crate::grid::Grid::parse_preset`] reads.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }

    /// Start a session on this preset, using its secret message.
    ///
    /// # Errors
    ///
    /// Only if the preset itself is malformed.
    pub fn session(&self) -> Result<Session, BuildError> {
        let config = SessionConfig {
            secret_message: Some(self.secret_message.to_string()),
            ..SessionConfig::default()
        };
        Session::new(self.rows, self.words, config)
    }
}

/// Ten values to look for in a 12x12 grid.
pub const VALUES_12: Preset = Preset {
    name: "values-12",
    rows: &[
        "HRESPETOERCO",
        "UAQPUEMOUUSB",
        "MIHQASBPGIEE",
        "ISDOHCAOMNVD",
        "LOLFNIIOROSI",
        "DDWETEREXVGE",
        "AEKAAPSVNARN",
        "DEPBMLITOCKC",
        "SMROYATYIEII",
        "EPCPAPEAADEA",
        "FIDELIDADVAK",
        "ASINCERIDADD",
    ],
    words: &[
        "HONESTIDAD",
        "HUMILDAD",
        "PACIENCIA",
        "LEALTAD",
        "RESPETO",
        "SINCERIDAD",
        "COMPROMISO",
        "OBEDIENCIA",
        "EMPATIA",
        "FIDELIDAD",
    ],
    secret_message: "ROWZWFNS",
};

pub const ALL: &[Preset] = &[VALUES_12];

/// Look a preset up by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Preset> {
    ALL.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_builtin_presets_build() {
        for preset in ALL {
            let session = preset.session().unwrap();
            assert_eq!(session.progress().total, preset.words.len());
            assert_eq!(session.grid().size(), preset.rows.len());
        }
    }

    #[test]
    fn test_text_round_trips_through_parser() {
        let parsed = Grid::parse_preset(&VALUES_12.to_text()).unwrap();
        assert_eq!(&parsed, VALUES_12.session().unwrap().grid());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("values-12").map(|p| p.rows.len()), Some(12));
        assert!(by_name("nope").is_none());
    }
}
