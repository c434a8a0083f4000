//! Chained multi-part logging with one visible and one compiled-out severity
//!
//! Run with `cargo run -p proven-console-logger --example lyrics`.

use proven_console_logger::log;

fn main() {
    let last_error = log!(Error,
        "割れた{}ネオン{}", "💔", "🌃";
        "ガラス{}の破片{}", "🪟", "💥";
        "君の嫌いな{}季節{}が来る{}", "😖", "❄️", "🥶";
        "「もうすぐ{}だと」", "🔜";
        "呪文{}のように{}繰り返して{}", "🧙", "🤔", "🔂";
        "何年{}が経つ{}", "🗓️", "⏭️"
    )
    .to_string();

    let last_info = log!(Info,
        "二人{}には夢{}があった{}", "👭", "😶‍🌫️", "😔";
        "今は凍り{}ついた花{}", "🧊", "🥀"
    )
    .to_string();

    println!("GetLastError = {last_error}");
    println!(
        "GetLastInfo = {} (should be `[none]` unless the threshold admits INFO)",
        if last_info.is_empty() { "[none]" } else { last_info.as_str() }
    );
}
