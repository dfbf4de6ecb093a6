//! The standard icon catalog.

use crate::error::Result;
use crate::icons::{self, Figure, Intensity};

use super::{Catalog, CatalogBuilder};

/// Directory, under the output root, for the in-app icon set.
pub const ICON_SET_DIR: &str = "icon-set";

/// Assemble the catalog of every icon the app ships.
pub fn standard() -> Result<Catalog> {
    let set = |name: &str| format!("{ICON_SET_DIR}/{name}");
    let mut builder = CatalogBuilder::new();

    builder
        .add(set("Singing.png"), icons::singing)
        .add(set("Lyrics.png"), icons::lyrics)
        .add(set("sessions.png"), icons::sessions)
        .add(set("Profile.png"), icons::profile)
        .add(set("Live_mode.png"), icons::live_mode)
        .add(set("Lyrics_sync.png"), icons::lyrics_sync)
        .add(set("Feedback_intensity_high.png"), || {
            icons::feedback(Intensity::High)
        })
        .add(set("Feedback_intensity_low.png"), || {
            icons::feedback(Intensity::Low)
        })
        .add(set("Mindfullness_voice.png"), icons::mindfulness_voice)
        .add(set("Language_accent.png"), icons::language_accent)
        .add(set("howto-icon.png"), icons::howto);

    builder
        .add("record_icon.png", icons::record)
        .add("Stop_icon.png", icons::stop)
        .add("metronome_icon.png", icons::metronome)
        .add("flag_icon.png", icons::flag)
        .add("bpm_icon.png", icons::bpm)
        .add("count_in_icon.png", icons::count_in)
        .add("lyrics_flow_speed_icon.png", icons::lyrics_flow)
        .add("about_icon.png", icons::about)
        .add("nosong_state.png", icons::no_song)
        .add("Female.png", || icons::figure(Figure::Female))
        .add("Male.png", || icons::figure(Figure::Male))
        .add("two_beats.png", || icons::beats(2))
        .add("four_beats.png", || icons::beats(4))
        .add("EasePocket.png", icons::ease_pocket);

    builder.build()
}
