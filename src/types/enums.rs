//! Closed enumerations of the wire schema.
//!
//! Every enum serializes to the exact spelling the service uses, and parses
//! back from it via [`FromStr`](std::str::FromStr). `as_str` / `Display`
//! return the same spelling, so building a request from a string literal and
//! from the typed variant are equivalent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enums {
    ($(
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $wire:literal ),+ $(,)? }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub enum $name {
                $( #[serde(rename = $wire)] $variant, )+
            }

            impl $name {
                /// The wire spelling of this value.
                pub fn as_str(&self) -> &'static str {
                    match self {
                        $( Self::$variant => $wire, )+
                    }
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $name {
                type Err = crate::Error;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s {
                        $( $wire => Ok(Self::$variant), )+
                        other => Err(crate::Error::validation(format!(
                            concat!("unrecognized ", stringify!($name), " value: {:?}"),
                            other
                        ))),
                    }
                }
            }
        )*
    };
}

wire_enums! {
    /// Processing state of a transcription job.
    TranscriptionJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }

    /// Processing state of a call analytics job.
    CallAnalyticsJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }

    /// Processing state of a medical scribe job.
    MedicalScribeJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }

    /// Language of the media file, as a BCP-47-style code.
    LanguageCode {
        AfZa => "af-ZA",
        ArAe => "ar-AE",
        ArSa => "ar-SA",
        CyGb => "cy-GB",
        DaDk => "da-DK",
        DeCh => "de-CH",
        DeDe => "de-DE",
        EnAb => "en-AB",
        EnAu => "en-AU",
        EnGb => "en-GB",
        EnIe => "en-IE",
        EnIn => "en-IN",
        EnNz => "en-NZ",
        EnUs => "en-US",
        EnWl => "en-WL",
        EnZa => "en-ZA",
        EsEs => "es-ES",
        EsUs => "es-US",
        FaIr => "fa-IR",
        FrCa => "fr-CA",
        FrFr => "fr-FR",
        GaIe => "ga-IE",
        GdGb => "gd-GB",
        HeIl => "he-IL",
        HiIn => "hi-IN",
        IdId => "id-ID",
        ItIt => "it-IT",
        JaJp => "ja-JP",
        KoKr => "ko-KR",
        MsMy => "ms-MY",
        NlNl => "nl-NL",
        PtBr => "pt-BR",
        PtPt => "pt-PT",
        RuRu => "ru-RU",
        TaIn => "ta-IN",
        TeIn => "te-IN",
        ThTh => "th-TH",
        TrTr => "tr-TR",
        ZhCn => "zh-CN",
        ZhTw => "zh-TW",
    }

    /// Container format of the input media file.
    MediaFormat {
        Mp3 => "mp3",
        Mp4 => "mp4",
        Wav => "wav",
        Flac => "flac",
        Ogg => "ogg",
        Amr => "amr",
        Webm => "webm",
    }

    /// Where the transcript was written: a bucket the caller owns, or one the
    /// service manages (output fetched via a pre-signed download URI).
    OutputLocationType {
        CustomerBucket => "CUSTOMER_BUCKET",
        ServiceBucket => "SERVICE_BUCKET",
    }

    /// Category of content to redact from the transcript.
    RedactionType {
        Pii => "PII",
    }

    /// Which transcripts to produce when redaction is enabled.
    RedactionOutput {
        Redacted => "redacted",
        RedactedAndUnredacted => "redacted_and_unredacted",
    }

    /// Kinds of personally identifiable information that can be redacted.
    PiiEntityType {
        BankAccountNumber => "BANK_ACCOUNT_NUMBER",
        BankRouting => "BANK_ROUTING",
        CreditDebitNumber => "CREDIT_DEBIT_NUMBER",
        CreditDebitCvv => "CREDIT_DEBIT_CVV",
        CreditDebitExpiry => "CREDIT_DEBIT_EXPIRY",
        Pin => "PIN",
        Email => "EMAIL",
        Address => "ADDRESS",
        Name => "NAME",
        Phone => "PHONE",
        Ssn => "SSN",
        All => "ALL",
    }

    /// Lifecycle state of a custom vocabulary or vocabulary filter.
    VocabularyState {
        Pending => "PENDING",
        Ready => "READY",
        Failed => "FAILED",
    }

    /// How matched vocabulary-filter words appear in the transcript.
    VocabularyFilterMethod {
        Remove => "remove",
        Mask => "mask",
        Tag => "tag",
    }

    /// Base model a custom language model was trained from. `WideBand` is for
    /// audio sampled at 16 kHz or higher, `NarrowBand` for under 16 kHz.
    BaseModelName {
        NarrowBand => "NarrowBand",
        WideBand => "WideBand",
    }

    /// Training state of a custom language model.
    ModelStatus {
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }

    /// Languages custom language models can be trained in.
    ClmLanguageCode {
        EnUs => "en-US",
        HiIn => "hi-IN",
        EsUs => "es-US",
        EnGb => "en-GB",
        EnAu => "en-AU",
        DeDe => "de-DE",
        JaJp => "ja-JP",
    }

    /// Medical specialty of the source audio.
    Specialty {
        PrimaryCare => "PRIMARYCARE",
    }

    /// Whether the medical audio is a dialogue or a dictation.
    MedicalJobType {
        Conversation => "CONVERSATION",
        Dictation => "DICTATION",
    }

    /// Content labeling mode for medical transcripts.
    MedicalContentIdentificationType {
        Phi => "PHI",
    }

    /// Subtitle file formats.
    SubtitleFormat {
        Vtt => "vtt",
        Srt => "srt",
    }

    /// Speaker on a call-analytics audio channel.
    ParticipantRole {
        Agent => "AGENT",
        Customer => "CUSTOMER",
    }

    /// Speaker on a medical-scribe audio channel.
    MedicalScribeParticipantRole {
        Clinician => "CLINICIAN",
        Patient => "PATIENT",
    }

    /// Languages supported by medical scribe jobs.
    MedicalScribeLanguageCode {
        EnUs => "en-US",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_wire_spelling() {
        assert_eq!(TranscriptionJobStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(MediaFormat::Flac.as_str(), "flac");
        assert_eq!(LanguageCode::EnUs.as_str(), "en-US");
        assert_eq!(OutputLocationType::CustomerBucket.as_str(), "CUSTOMER_BUCKET");
        assert_eq!(RedactionOutput::RedactedAndUnredacted.as_str(), "redacted_and_unredacted");
        assert_eq!(BaseModelName::WideBand.as_str(), "WideBand");
    }

    #[test]
    fn from_str_is_the_inverse_of_as_str() {
        let parsed: LanguageCode = "zh-TW".parse().unwrap();
        assert_eq!(parsed, LanguageCode::ZhTw);

        let parsed: VocabularyFilterMethod = "mask".parse().unwrap();
        assert_eq!(parsed, VocabularyFilterMethod::Mask);

        assert!("EN-US".parse::<LanguageCode>().is_err());
        assert!("queued".parse::<TranscriptionJobStatus>().is_err());
    }

    #[test]
    fn display_equals_as_str() {
        assert_eq!(
            MedicalScribeParticipantRole::Clinician.to_string(),
            MedicalScribeParticipantRole::Clinician.as_str()
        );
        assert_eq!(Specialty::PrimaryCare.to_string(), "PRIMARYCARE");
    }

    #[test]
    fn serde_uses_wire_spelling() {
        let json = serde_json::to_string(&TranscriptionJobStatus::Queued).unwrap();
        assert_eq!(json, "\"QUEUED\"");

        let back: MediaFormat = serde_json::from_str("\"webm\"").unwrap();
        assert_eq!(back, MediaFormat::Webm);

        assert!(serde_json::from_str::<MediaFormat>("\"aiff\"").is_err());
    }
}
