//! Audio/conferencing models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How attendees connect to the audio conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioType {
    #[serde(rename = "PSTN")]
    Pstn,
    #[serde(rename = "VOIP")]
    Voip,
    Hybrid,
    Private,
}

impl std::str::FromStr for AudioType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PSTN" => Ok(AudioType::Pstn),
            "VOIP" => Ok(AudioType::Voip),
            "HYBRID" => Ok(AudioType::Hybrid),
            "PRIVATE" => Ok(AudioType::Private),
            _ => Err(format!("unknown audio type: {s}")),
        }
    }
}

/// Body of the update audio call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioUpdate {
    #[serde(rename = "type")]
    pub audio_type: AudioType,
    /// Toll and toll-free numbers per Alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pstn_info: Option<Value>,
    /// Settings for an own conferencing system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_info: Option<Value>,
}

impl AudioUpdate {
    pub fn new(audio_type: AudioType) -> Self {
        Self {
            audio_type,
            pstn_info: None,
            private_info: None,
        }
    }

    pub fn pstn_info(mut self, info: Value) -> Self {
        self.pstn_info = Some(info);
        self
    }

    pub fn private_info(mut self, info: Value) -> Self {
        self.private_info = Some(info);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audio_update_body() {
        let update = AudioUpdate::new(AudioType::Pstn).pstn_info(json!({ "US": { "toll": true } }));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "type": "PSTN", "pstnInfo": { "US": { "toll": true } } })
        );

        let voip = serde_json::to_value(AudioUpdate::new(AudioType::Voip)).unwrap();
        assert_eq!(voip, json!({ "type": "VOIP" }));
    }

    #[test]
    fn test_audio_type_from_str() {
        assert_eq!("pstn".parse::<AudioType>(), Ok(AudioType::Pstn));
        assert_eq!("Hybrid".parse::<AudioType>(), Ok(AudioType::Hybrid));
        assert!("fax".parse::<AudioType>().is_err());
    }
}
