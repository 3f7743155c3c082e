mod generator;

pub use generator::{aida, capitalize, dm_opener, four_ps, headlines, positioning, tagline};

use crate::core::form::FormState;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every copy block derived from one [`FormState`]. Never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifacts {
    pub positioning: String,
    pub tagline: String,
    pub headlines: [String; 3],
    pub four_ps: [String; 4],
    pub aida: [String; 4],
    pub dm_opener: String,
}

/// Names of the copyable blocks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Artifact {
    Positioning,
    Tagline,
    Headlines,
    DmOpener,
    FourPs,
    Aida,
}

impl Artifact {
    pub fn title(self) -> &'static str {
        match self {
            Self::Positioning => "Positioning Line",
            Self::Tagline => "Tagline",
            Self::Headlines => "Headlines",
            Self::DmOpener => "DM Opener",
            Self::FourPs => "4Ps Draft",
            Self::Aida => "AIDA Script",
        }
    }
}

impl GeneratedArtifacts {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            positioning: positioning(state),
            tagline: tagline(state),
            headlines: headlines(state),
            four_ps: four_ps(state),
            aida: aida(state),
            dm_opener: dm_opener(state),
        }
    }

    /// Lines making up one block. Single-string blocks have one line.
    pub fn lines(&self, artifact: Artifact) -> Vec<&str> {
        match artifact {
            Artifact::Positioning => vec![self.positioning.as_str()],
            Artifact::Tagline => vec![self.tagline.as_str()],
            Artifact::DmOpener => vec![self.dm_opener.as_str()],
            Artifact::Headlines => self.headlines.iter().map(String::as_str).collect(),
            Artifact::FourPs => self.four_ps.iter().map(String::as_str).collect(),
            Artifact::Aida => self.aida.iter().map(String::as_str).collect(),
        }
    }

    /// Text to copy: the whole block, or a single list item when `index` is set.
    pub fn text(&self, artifact: Artifact, index: Option<usize>) -> Option<String> {
        let lines = self.lines(artifact);
        match index {
            Some(i) => lines.get(i).map(|line| (*line).to_string()),
            None => Some(lines.join("\n")),
        }
    }

    /// Titled plain-text rendering of every block.
    pub fn render_blocks(&self) -> String {
        use strum::IntoEnumIterator;

        let mut out = String::new();
        for artifact in Artifact::iter() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("── {} ──\n", artifact.title()));
            let lines = self.lines(artifact);
            if lines.len() == 1 {
                out.push_str(lines[0]);
                out.push('\n');
            } else {
                for line in lines {
                    out.push_str("• ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        out
    }
}
