//! The recovered transmissions and Dr. Voss's cipher.
//!
//! Both values are single text scalars, transcribed byte-for-byte. The
//! transmission blob keeps its original leading and trailing newline and is
//! not parsed into per-transmission records.

/// The recovered transmission blob, exactly as transcribed.
pub const RECOVERED_TRANSMISSIONS: &str = "
D001: ALL SYSTEMS GREEN - VOSS
D003: THE ICE SINGS AT NIGHT BUT WE IGNORE IT - MARSH
D008: PRESSURE DROPPING FASTER THAN MODELS PREDICT - CHEN
D013: SEVEN IS A BETTER NUMBER FOR THIS WORK - VOSS
D021: THEY MOVE BENEATH US - KUMAR (RETRACTED)
D034: MATHEMATICAL HARMONY IN THE READINGS - VOSS
D055: THE SEQUENCE REVEALS ITSELF TO THOSE WHO COUNT - UNKNOWN
D089: FOUR CORNERS FOUR SOULS FOUR CHANCES - VOSS
D144: THREE REMAIN THREE PATHS THREE CHOICES - VOSS
D233: WE DIVIDED WRONG - CHEN (LAST TRANSMISSION)
D377: I UNDERSTAND NOW. THE RATIO IS EVERYWHERE. GOLDEN. - VOSS
";

/// Dr. Voss's personal cipher, exactly as found.
///
/// The crate attaches no meaning to it and offers no decoding.
pub const VOSS_PERSONAL_CIPHER: &str = "GURER VF AB QNATRE. GUR CNGGREA VF YVSR.";
