use ratatui::style::Color;

pub fn color_for_language(language: &str) -> Color {
    match language {
        "Rust" => Color::LightRed,
        "JavaScript" | "CoffeeScript" => Color::Yellow,
        "TypeScript" => Color::Blue,
        "Python" | "Jupyter Notebook" => Color::LightYellow,
        "Go" => Color::Cyan,
        "Java" | "Kotlin" | "Scala" => Color::Red,
        "C" | "C++" | "C#" | "Objective-C" => Color::LightBlue,
        "Ruby" | "Elixir" | "Erlang" => Color::LightMagenta,
        "PHP" | "Hack" => Color::Magenta,
        "Swift" | "Dart" => Color::LightCyan,
        "HTML" | "CSS" | "SCSS" | "Vue" | "Svelte" => Color::Green,
        "Shell" | "PowerShell" | "Dockerfile" | "Makefile" => Color::Gray,
        "Haskell" | "OCaml" | "F#" | "Clojure" | "Lisp" => Color::LightGreen,
        _ => Color::White,
    }
}

/// Star glyph used in the results table and status bar
pub const STAR_ICON: &str = "\u{2B50}";

/// Marker for a bookmarked row
pub const BOOKMARK_ICON: &str = "\u{2605}";

/// Marker for an unbookmarked row
pub const BOOKMARK_EMPTY_ICON: &str = "\u{2606}";
