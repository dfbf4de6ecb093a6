//! Icon builders.
//!
//! Each builder allocates one canvas, issues a fixed sequence of primitive
//! calls in logical coordinates using [`PALETTE`](crate::types::PALETTE), and
//! returns the canvas. Builders do no I/O and share nothing but the palette,
//! so the same call always yields the same pixels.
//!
//! Closely related icons are one builder over a discrete parameter
//! ([`Intensity`], [`Figure`], a beat count) rather than copies.

mod documents;
mod tempo;
mod transport;
mod voice;

pub use documents::{howto, lyrics, lyrics_flow, lyrics_sync, no_song, sessions};
pub use tempo::{beats, bpm, count_in, ease_pocket, feedback, metronome, Intensity};
pub use transport::{about, flag, live_mode, record, stop};
pub use voice::{figure, language_accent, mindfulness_voice, profile, singing, Figure};
