/// Audio container formats accepted for upload.
///
/// Browsers recording through MediaRecorder send `audio/webm`; the rest cover
/// common pre-recorded uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Webm,
    Wav,
    Mp3,
    Ogg,
    M4a,
}

impl AudioFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "audio/webm" | "video/webm" => Some(Self::Webm),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/ogg" => Some(Self::Ogg),
            "audio/mp4" | "audio/x-m4a" | "audio/m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "webm" => Some(Self::Webm),
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            "m4a" | "mp4" => Some(Self::M4a),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Webm => "audio/webm",
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::M4a => "audio/mp4",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Webm => "webm",
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::M4a => "m4a",
        }
    }
}
