//! Voice-entry parsing for hands-free stock additions.
//!
//! Understands transcripts like "add 5 kg rice at 70 rupees". Anything else
//! comes back as [`VoiceCommand::Unknown`] with the original text so the UI
//! can show what was heard.

use std::sync::OnceLock;

use regex::Regex;

/// Parsed intent from a voice transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceCommand {
    AddProduct {
        quantity: f64,
        unit: String,
        name: String,
        price: i64,
    },
    Unknown {
        text: String,
    },
}

fn add_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // "add <qty> [unit] <name> at|for <price> rupees|rs"
        Regex::new(r"(?i)add (\d+(?:\.\d+)?)\s*([a-zA-Z]+)?\s+(.+?)\s+(?:at|for)\s+(\d+)\s*(?:rupees?|rs?\.?)")
            .expect("voice add-pattern is valid")
    })
}

/// Parse a transcript into a command.
pub fn parse_voice_command(transcript: &str) -> VoiceCommand {
    let text = transcript.to_lowercase();

    if let Some(caps) = add_pattern().captures(&text) {
        let quantity: f64 = caps[1].parse().unwrap_or(0.0);
        let price: i64 = caps[4].parse().unwrap_or(0);
        let unit = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "pieces".to_string());

        return VoiceCommand::AddProduct {
            quantity,
            unit,
            name: caps[3].trim().to_string(),
            price,
        };
    }

    VoiceCommand::Unknown { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_unit() {
        let parsed = parse_voice_command("Add 5 kg Rice at 70 rupees");
        assert_eq!(
            parsed,
            VoiceCommand::AddProduct {
                quantity: 5.0,
                unit: "kg".to_string(),
                name: "rice".to_string(),
                price: 70,
            }
        );
    }

    #[test]
    fn parses_fractional_quantity_and_rs_suffix() {
        let parsed = parse_voice_command("add 2.5 kg toor dal for 85 rs");
        assert_eq!(
            parsed,
            VoiceCommand::AddProduct {
                quantity: 2.5,
                unit: "kg".to_string(),
                name: "toor dal".to_string(),
                price: 85,
            }
        );
    }

    #[test]
    fn unknown_transcript_is_preserved() {
        let parsed = parse_voice_command("What is the weather");
        assert_eq!(
            parsed,
            VoiceCommand::Unknown {
                text: "what is the weather".to_string()
            }
        );
    }
}
