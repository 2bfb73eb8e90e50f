//! Short-code → glyph rendering and unicode codepoint derivation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Short codes understood by [`render_short_name`], without surrounding colons.
static SHORTCODES: &[(&str, &str)] = &[
    // Smileys & emotion
    ("grinning_face", "😀"),
    ("grinning", "😀"),
    ("grinning_face_with_big_eyes", "😃"),
    ("smiley", "😃"),
    ("grinning_face_with_smiling_eyes", "😄"),
    ("smile", "😄"),
    ("beaming_face_with_smiling_eyes", "😁"),
    ("grin", "😁"),
    ("face_with_tears_of_joy", "😂"),
    ("joy", "😂"),
    ("rolling_on_the_floor_laughing", "🤣"),
    ("slightly_smiling_face", "🙂"),
    ("winking_face", "😉"),
    ("wink", "😉"),
    ("smiling_face_with_halo", "😇"),
    ("innocent", "😇"),
    ("smiling_face_with_heart-eyes", "😍"),
    ("heart_eyes", "😍"),
    ("face_blowing_a_kiss", "😘"),
    ("kissing_heart", "😘"),
    ("thinking_face", "🤔"),
    ("thinking", "🤔"),
    ("neutral_face", "😐"),
    ("expressionless_face", "😑"),
    ("smirking_face", "😏"),
    ("smirk", "😏"),
    ("unamused_face", "😒"),
    ("relieved_face", "😌"),
    ("pensive_face", "😔"),
    ("sleepy_face", "😪"),
    ("sleeping_face", "😴"),
    ("sleeping", "😴"),
    ("face_with_medical_mask", "😷"),
    ("nauseated_face", "🤢"),
    ("hot_face", "🥵"),
    ("cold_face", "🥶"),
    ("dizzy_face", "😵"),
    ("exploding_head", "🤯"),
    ("partying_face", "🥳"),
    ("smiling_face_with_sunglasses", "😎"),
    ("sunglasses", "😎"),
    ("confused_face", "😕"),
    ("worried_face", "😟"),
    ("frowning_face", "☹️"),
    ("face_with_open_mouth", "😮"),
    ("astonished_face", "😲"),
    ("flushed_face", "😳"),
    ("pleading_face", "🥺"),
    ("fearful_face", "😨"),
    ("anxious_face_with_sweat", "😰"),
    ("crying_face", "😢"),
    ("cry", "😢"),
    ("loudly_crying_face", "😭"),
    ("sob", "😭"),
    ("face_screaming_in_fear", "😱"),
    ("scream", "😱"),
    ("tired_face", "😫"),
    ("yawning_face", "🥱"),
    ("pouting_face", "😡"),
    ("rage", "😡"),
    ("angry_face", "😠"),
    ("angry", "😠"),
    ("face_with_symbols_on_mouth", "🤬"),
    ("smiling_face_with_horns", "😈"),
    ("skull", "💀"),
    ("pile_of_poo", "💩"),
    ("clown_face", "🤡"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot", "🤖"),
    // Hearts & symbols
    ("red_heart", "❤️"),
    ("heart", "❤️"),
    ("broken_heart", "💔"),
    ("sparkling_heart", "💖"),
    ("hundred_points", "💯"),
    ("100", "💯"),
    ("collision", "💥"),
    ("boom", "💥"),
    ("sparkles", "✨"),
    ("fire", "🔥"),
    ("star", "⭐"),
    ("zzz", "💤"),
    // Hands & people
    ("thumbs_up", "👍"),
    ("+1", "👍"),
    ("thumbs_down", "👎"),
    ("-1", "👎"),
    ("clapping_hands", "👏"),
    ("clap", "👏"),
    ("waving_hand", "👋"),
    ("wave", "👋"),
    ("folded_hands", "🙏"),
    ("pray", "🙏"),
    ("flexed_biceps", "💪"),
    ("muscle", "💪"),
    ("ok_hand", "👌"),
    ("victory_hand", "✌️"),
    ("raising_hands", "🙌"),
    ("man_technologist", "👨\u{200d}💻"),
    ("woman_technologist", "👩\u{200d}💻"),
    ("family", "👪"),
    // Animals & nature
    ("dog_face", "🐶"),
    ("dog", "🐶"),
    ("cat_face", "🐱"),
    ("cat", "🐱"),
    ("mouse_face", "🐭"),
    ("rabbit_face", "🐰"),
    ("fox", "🦊"),
    ("bear", "🐻"),
    ("panda", "🐼"),
    ("lion", "🦁"),
    ("monkey_face", "🐵"),
    ("see-no-evil_monkey", "🙈"),
    ("bird", "🐦"),
    ("penguin", "🐧"),
    ("snake", "🐍"),
    ("fish", "🐟"),
    ("butterfly", "🦋"),
    ("bug", "🐛"),
    ("sunflower", "🌻"),
    ("rose", "🌹"),
    ("evergreen_tree", "🌲"),
    ("four_leaf_clover", "🍀"),
    ("sun", "☀️"),
    ("cloud", "☁️"),
    ("umbrella_with_rain_drops", "☔"),
    ("snowflake", "❄️"),
    ("high_voltage", "⚡"),
    ("zap", "⚡"),
    ("rainbow", "🌈"),
    ("globe_showing_europe-africa", "🌍"),
    ("earth_africa", "🌍"),
    ("crescent_moon", "🌙"),
    // Food & drink
    ("red_apple", "🍎"),
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("pizza", "🍕"),
    ("hamburger", "🍔"),
    ("french_fries", "🍟"),
    ("hot_dog", "🌭"),
    ("taco", "🌮"),
    ("birthday_cake", "🎂"),
    ("birthday", "🎂"),
    ("doughnut", "🍩"),
    ("cookie", "🍪"),
    ("chocolate_bar", "🍫"),
    ("hot_beverage", "☕"),
    ("coffee", "☕"),
    ("beer_mug", "🍺"),
    ("beer", "🍺"),
    ("wine_glass", "🍷"),
    ("clinking_glasses", "🥂"),
    // Activities & objects
    ("party_popper", "🎉"),
    ("tada", "🎉"),
    ("wrapped_gift", "🎁"),
    ("gift", "🎁"),
    ("balloon", "🎈"),
    ("soccer_ball", "⚽"),
    ("basketball", "🏀"),
    ("trophy", "🏆"),
    ("video_game", "🎮"),
    ("musical_note", "🎵"),
    ("guitar", "🎸"),
    ("books", "📚"),
    ("laptop", "💻"),
    ("mobile_phone", "📱"),
    ("money_bag", "💰"),
    ("moneybag", "💰"),
    ("light_bulb", "💡"),
    ("bulb", "💡"),
    ("rocket", "🚀"),
    ("airplane", "✈️"),
    ("automobile", "🚗"),
    ("car", "🚗"),
    ("house", "🏠"),
    ("alarm_clock", "⏰"),
    ("hourglass_done", "⌛"),
    ("check_mark_button", "✅"),
    ("white_check_mark", "✅"),
    ("cross_mark", "❌"),
    ("x", "❌"),
    ("warning", "⚠️"),
    ("question_mark", "❓"),
    ("question", "❓"),
    ("flag_united_states", "🇺🇸"),
];

static SHORTCODE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SHORTCODES.iter().copied().collect());

/// Render a short code such as `":grinning_face:"` into its glyph.
///
/// Surrounding colons are optional. Unknown short codes come back unchanged,
/// so a catalog with an unrecognised code still produces visible output.
pub fn render_short_name(short_name: &str) -> String {
    let code = short_name
        .strip_prefix(':')
        .and_then(|s| s.strip_suffix(':'))
        .unwrap_or(short_name);
    match SHORTCODE_MAP.get(code) {
        Some(glyph) => (*glyph).to_string(),
        None => short_name.to_string(),
    }
}

/// `U+XXXX` for single-codepoint glyphs; `None` for anything longer or empty.
pub fn unicode_of(glyph: &str) -> Option<String> {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(format!("U+{:X}", ch as u32)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_colon_wrapped_short_code() {
        assert_eq!(render_short_name(":grinning_face:"), "😀");
        assert_eq!(render_short_name(":crying_face:"), "😢");
    }

    #[test]
    fn colons_are_optional() {
        assert_eq!(render_short_name("pizza"), "🍕");
    }

    #[test]
    fn unknown_short_code_is_returned_unchanged() {
        assert_eq!(render_short_name(":not_an_emoji:"), ":not_an_emoji:");
        assert_eq!(render_short_name(""), "");
    }

    #[test]
    fn unicode_for_single_codepoint() {
        assert_eq!(unicode_of("😀").as_deref(), Some("U+1F600"));
        assert_eq!(unicode_of("☕").as_deref(), Some("U+2615"));
    }

    #[test]
    fn unicode_none_for_multi_codepoint_glyphs() {
        // heart + variation selector
        assert_eq!(unicode_of("❤️"), None);
        // flag is two regional indicators
        assert_eq!(unicode_of("🇺🇸"), None);
        // zero-width-joiner sequence
        assert_eq!(unicode_of(&render_short_name("man_technologist")), None);
    }

    #[test]
    fn unicode_none_for_empty_glyph() {
        assert_eq!(unicode_of(""), None);
    }

    #[test]
    fn unicode_uses_uppercase_hex_without_padding() {
        assert_eq!(unicode_of("a").as_deref(), Some("U+61"));
    }
}
