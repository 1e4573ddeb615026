//! Builtin shortcode table.

/// `(shortcode, glyph)` pairs. Shortcodes are lowercase; several aliases may
/// share a glyph.
pub(super) const BUILTIN: &[(&str, &str)] = &[
    // Faces
    ("smile", "😄"),
    ("smiley", "😃"),
    ("grinning", "😀"),
    ("blush", "😊"),
    ("relaxed", "☺️"),
    ("wink", "😉"),
    ("heart_eyes", "😍"),
    ("kissing_heart", "😘"),
    ("stuck_out_tongue", "😛"),
    ("stuck_out_tongue_winking_eye", "😜"),
    ("stuck_out_tongue_closed_eyes", "😝"),
    ("disappointed", "😞"),
    ("worried", "😟"),
    ("angry", "😠"),
    ("rage", "😡"),
    ("cry", "😢"),
    ("persevere", "😣"),
    ("triumph", "😤"),
    ("sleepy", "😪"),
    ("sweat", "😓"),
    ("sob", "😭"),
    ("joy", "😂"),
    ("astonished", "😲"),
    ("scream", "😱"),
    ("tired_face", "😫"),
    ("sleeping", "😴"),
    ("sunglasses", "😎"),
    ("confused", "😕"),
    ("innocent", "😇"),
    ("smirk", "😏"),
    ("expressionless", "😑"),
    ("neutral_face", "😐"),
    ("thinking_face", "🤔"),
    ("thinking", "🤔"),
    ("face_with_rolling_eyes", "🙄"),
    ("hushed", "😯"),
    ("frowning", "😦"),
    ("anguished", "😧"),
    ("open_mouth", "😮"),
    ("grimacing", "😬"),
    ("zipper_mouth_face", "🤐"),
    ("mask", "😷"),
    ("nerd_face", "🤓"),
    ("cowboy_hat_face", "🤠"),
    ("clown_face", "🤡"),
    ("nauseated_face", "🤢"),
    ("rofl", "🤣"),
    ("drooling_face", "🤤"),
    ("lying_face", "🤥"),
    ("sneezing_face", "🤧"),
    ("money_mouth_face", "🤑"),
    ("face_with_thermometer", "🤒"),
    ("face_with_head_bandage", "🤕"),
    ("slightly_smiling_face", "🙂"),
    ("slightly_frowning_face", "🙁"),
    ("upside_down_face", "🙃"),
    ("face_with_monocle", "🧐"),
    ("star_struck", "🤩"),
    ("zany_face", "🤪"),
    ("shushing_face", "🤫"),
    ("face_with_symbols_on_mouth", "🤬"),
    ("face_with_hand_over_mouth", "🤭"),
    ("face_vomiting", "🤮"),
    ("exploding_head", "🤯"),
    ("pleading_face", "🥺"),
    ("partying_face", "🥳"),
    ("hot_face", "🥵"),
    ("cold_face", "🥶"),
    ("woozy_face", "🥴"),
    ("yawning_face", "🥱"),
    // Gestures
    ("thumbsup", "👍"),
    ("+1", "👍"),
    ("thumbsdown", "👎"),
    ("-1", "👎"),
    ("ok_hand", "👌"),
    ("punch", "👊"),
    ("fist", "✊"),
    ("v", "✌️"),
    ("wave", "👋"),
    ("hand", "✋"),
    ("raised_hand", "✋"),
    ("open_hands", "👐"),
    ("point_up", "☝️"),
    ("point_down", "👇"),
    ("point_left", "👈"),
    ("point_right", "👉"),
    ("raised_hands", "🙌"),
    ("pray", "🙏"),
    ("clap", "👏"),
    ("muscle", "💪"),
    ("metal", "🤘"),
    ("fu", "🖕"),
    ("writing_hand", "✍️"),
    ("selfie", "🤳"),
    ("nail_care", "💅"),
    ("ring", "💍"),
    ("lipstick", "💄"),
    // Hearts
    ("heart", "❤️"),
    ("yellow_heart", "💛"),
    ("green_heart", "💚"),
    ("blue_heart", "💙"),
    ("purple_heart", "💜"),
    ("black_heart", "🖤"),
    ("broken_heart", "💔"),
    ("heavy_heart_exclamation", "❣️"),
    ("two_hearts", "💕"),
    ("revolving_hearts", "💞"),
    ("heartbeat", "💓"),
    ("heartpulse", "💗"),
    ("sparkling_heart", "💖"),
    ("cupid", "💘"),
    ("gift_heart", "💝"),
    ("heart_decoration", "💟"),
    ("orange_heart", "🧡"),
    ("white_heart", "🤍"),
    ("brown_heart", "🤎"),
    // Objects & Symbols
    ("fire", "🔥"),
    ("star", "⭐"),
    ("star2", "🌟"),
    ("sparkles", "✨"),
    ("zap", "⚡"),
    ("sunny", "☀️"),
    ("cloud", "☁️"),
    ("snowflake", "❄️"),
    ("rainbow", "🌈"),
    ("umbrella", "☂️"),
    ("coffee", "☕"),
    ("beer", "🍺"),
    ("beers", "🍻"),
    ("cocktail", "🍸"),
    ("tropical_drink", "🍹"),
    ("wine_glass", "🍷"),
    ("fork_and_knife", "🍴"),
    ("pizza", "🍕"),
    ("hamburger", "🍔"),
    ("fries", "🍟"),
    ("popcorn", "🍿"),
    ("cake", "🍰"),
    ("cookie", "🍪"),
    ("chocolate_bar", "🍫"),
    ("candy", "🍬"),
    ("lollipop", "🍭"),
    ("ice_cream", "🍨"),
    ("doughnut", "🍩"),
    ("apple", "🍎"),
    ("green_apple", "🍏"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("rocket", "🚀"),
    ("airplane", "✈️"),
    ("car", "🚗"),
    ("taxi", "🚕"),
    ("bus", "🚌"),
    ("ambulance", "🚑"),
    ("fire_engine", "🚒"),
    ("police_car", "🚓"),
    ("bike", "🚲"),
    ("ship", "🚢"),
    ("phone", "📱"),
    ("computer", "💻"),
    ("keyboard", "⌨️"),
    ("desktop_computer", "🖥️"),
    ("printer", "🖨️"),
    ("camera", "📷"),
    ("video_camera", "📹"),
    ("movie_camera", "🎥"),
    ("tv", "📺"),
    ("radio", "📻"),
    ("speaker", "🔊"),
    ("mute", "🔇"),
    ("bell", "🔔"),
    ("no_bell", "🔕"),
    ("mega", "📣"),
    ("loudspeaker", "📢"),
    ("bulb", "💡"),
    ("flashlight", "🔦"),
    ("book", "📖"),
    ("books", "📚"),
    ("bookmark", "🔖"),
    ("link", "🔗"),
    ("paperclip", "📎"),
    ("scissors", "✂️"),
    ("lock", "🔒"),
    ("unlock", "🔓"),
    ("key", "🔑"),
    ("hammer", "🔨"),
    ("wrench", "🔧"),
    ("gear", "⚙️"),
    ("bomb", "💣"),
    ("gun", "🔫"),
    ("trophy", "🏆"),
    ("medal_sports", "🏅"),
    ("medal_military", "🎖️"),
    ("crown", "👑"),
    ("gem", "💎"),
    ("moneybag", "💰"),
    ("dollar", "💵"),
    ("credit_card", "💳"),
    ("chart", "💹"),
    ("chart_with_upwards_trend", "📈"),
    ("chart_with_downwards_trend", "📉"),
    ("envelope", "✉️"),
    ("email", "📧"),
    ("inbox_tray", "📥"),
    ("outbox_tray", "📤"),
    ("package", "📦"),
    ("date", "📅"),
    ("calendar", "📆"),
    ("spiral_calendar", "🗓️"),
    ("memo", "📝"),
    ("pencil", "✏️"),
    ("pencil2", "✏️"),
    ("pen", "🖊️"),
    ("clipboard", "📋"),
    ("pushpin", "📌"),
    ("round_pushpin", "📍"),
    ("triangular_flag_on_post", "🚩"),
    ("white_flag", "🏳️"),
    ("checkered_flag", "🏁"),
    // Status & Misc
    ("white_check_mark", "✅"),
    ("check", "✔️"),
    ("heavy_check_mark", "✔️"),
    ("x", "❌"),
    ("negative_squared_cross_mark", "❎"),
    ("exclamation", "❗"),
    ("question", "❓"),
    ("grey_exclamation", "❕"),
    ("grey_question", "❔"),
    ("bangbang", "‼️"),
    ("interrobang", "⁉️"),
    ("warning", "⚠️"),
    ("no_entry", "⛔"),
    ("no_entry_sign", "🚫"),
    ("stop_sign", "🛑"),
    ("construction", "🚧"),
    ("sos", "🆘"),
    ("information_source", "ℹ️"),
    ("arrow_right", "➡️"),
    ("arrow_left", "⬅️"),
    ("arrow_up", "⬆️"),
    ("arrow_down", "⬇️"),
    ("arrow_upper_right", "↗️"),
    ("arrow_lower_right", "↘️"),
    ("arrow_lower_left", "↙️"),
    ("arrow_upper_left", "↖️"),
    ("arrows_counterclockwise", "🔄"),
    ("rewind", "⏪"),
    ("fast_forward", "⏩"),
    ("arrow_forward", "▶️"),
    ("arrow_backward", "◀️"),
    ("new", "🆕"),
    ("top", "🔝"),
    ("up", "🆙"),
    ("cool", "🆒"),
    ("free", "🆓"),
    ("ok", "🆗"),
    ("ng", "🆖"),
    ("soon", "🔜"),
    ("on", "🔛"),
    ("end", "🔚"),
    ("back", "🔙"),
    ("100", "💯"),
    ("1234", "🔢"),
    ("eyes", "👀"),
    ("eye", "👁️"),
    ("ear", "👂"),
    ("nose", "👃"),
    ("tongue", "👅"),
    ("lips", "👄"),
    ("brain", "🧠"),
    ("bone", "🦴"),
    ("dog", "🐶"),
    ("cat", "🐱"),
    ("mouse", "🐭"),
    ("rabbit", "🐰"),
    ("fox_face", "🦊"),
    ("bear", "🐻"),
    ("panda_face", "🐼"),
    ("koala", "🐨"),
    ("tiger", "🐯"),
    ("lion", "🦁"),
    ("cow", "🐮"),
    ("pig", "🐷"),
    ("frog", "🐸"),
    ("monkey_face", "🐵"),
    ("chicken", "🐔"),
    ("penguin", "🐧"),
    ("bird", "🐦"),
    ("baby_chick", "🐤"),
    ("eagle", "🦅"),
    ("owl", "🦉"),
    ("bat", "🦇"),
    ("wolf", "🐺"),
    ("horse", "🐴"),
    ("unicorn", "🦄"),
    ("bee", "🐝"),
    ("bug", "🐛"),
    ("butterfly", "🦋"),
    ("snail", "🐌"),
    ("spider", "🕷️"),
    ("turtle", "🐢"),
    ("snake", "🐍"),
    ("lizard", "🦎"),
    ("scorpion", "🦂"),
    ("crab", "🦀"),
    ("shrimp", "🦐"),
    ("squid", "🦑"),
    ("octopus", "🐙"),
    ("whale", "🐳"),
    ("dolphin", "🐬"),
    ("fish", "🐟"),
    ("tropical_fish", "🐠"),
    ("shark", "🦈"),
    ("crocodile", "🐊"),
    ("elephant", "🐘"),
    ("rhinoceros", "🦏"),
    ("hippopotamus", "🦛"),
    ("camel", "🐫"),
    ("giraffe", "🦒"),
    ("zebra", "🦓"),
    ("gorilla", "🦍"),
    ("dragon", "🐉"),
    ("dragon_face", "🐲"),
    ("dinosaur", "🦕"),
    ("t-rex", "🦖"),
    // Celebration
    ("tada", "🎉"),
    ("party_popper", "🎉"),
    ("confetti_ball", "🎊"),
    ("balloon", "🎈"),
    ("gift", "🎁"),
    ("ribbon", "🎀"),
    ("speech_balloon", "💬"),
    ("thought_balloon", "💭"),
    ("zzz", "💤"),
    ("dizzy", "💫"),
    ("sweat_drops", "💦"),
    ("dash", "💨"),
    ("poop", "💩"),
    ("hankey", "💩"),
    ("shit", "💩"),
    ("skull", "💀"),
    ("skull_and_crossbones", "☠️"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot", "🤖"),
    ("jack_o_lantern", "🎃"),
    ("smiley_cat", "😺"),
    ("smile_cat", "😸"),
    ("joy_cat", "😹"),
    ("heart_eyes_cat", "😻"),
    ("smirk_cat", "😼"),
    ("kissing_cat", "😽"),
    ("scream_cat", "🙀"),
    ("crying_cat_face", "😿"),
    ("pouting_cat", "😾"),
    ("see_no_evil", "🙈"),
    ("hear_no_evil", "🙉"),
    ("speak_no_evil", "🙊"),
];
