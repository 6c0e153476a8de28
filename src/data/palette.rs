//! Color assignment for histogram labels.
//!
//! Colors are chosen by a label's discovery index. The policy is injected
//! into the aggregator so that the overflow case (more labels than colors)
//! is an explicit decision rather than an out-of-range lookup.

use anyhow::{ensure, Result};

/// Colors used when no palette is configured.
pub const DEFAULT_COLORS: [&str; 6] = ["gray", "red", "blue", "green", "yellow", "cyan"];

/// Maps a label's discovery index to a color name.
pub trait ColorPolicy {
    fn color(&self, index: usize) -> String;
}

impl<F> ColorPolicy for F
where
    F: Fn(usize) -> String,
{
    fn color(&self, index: usize) -> String {
        self(index)
    }
}

/// A fixed, non-empty list of colors that wraps around when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from color names. Fails if `colors` is empty.
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        ensure!(!colors.is_empty(), "palette must contain at least one color");
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ColorPolicy for Palette {
    fn color(&self, index: usize) -> String {
        self.colors[index % self.colors.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_order() {
        let palette = Palette::default();
        let colors: Vec<String> = (0..6).map(|i| palette.color(i)).collect();
        assert_eq!(colors, DEFAULT_COLORS);
    }

    #[test]
    fn test_palette_wraps_around() {
        let palette = Palette::default();
        assert_eq!(palette.color(6), "gray");
        assert_eq!(palette.color(7), "red");
        assert_eq!(palette.color(13), "red");
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let err = Palette::new(Vec::<String>::new()).unwrap_err();
        assert!(err.to_string().contains("at least one color"));
    }

    #[test]
    fn test_single_color_palette() {
        let palette = Palette::new(["magenta"]).unwrap();
        assert_eq!(palette.colors().len(), 1);
        assert_eq!(palette.color(0), "magenta");
        assert_eq!(palette.color(42), "magenta");
    }

    #[test]
    fn test_closure_policy() {
        let policy = |i: usize| format!("#{:02x}0000", i * 16);
        assert_eq!(policy.color(0), "#000000");
        assert_eq!(policy.color(2), "#200000");
    }
}
