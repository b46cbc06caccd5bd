//! RGB channel identifiers.

use std::fmt;

/// One of the three color components of an RGB image.
///
/// The discriminant is the channel's position in an interleaved `R G B`
/// pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    /// Red, index 0.
    Red = 0,
    /// Green, index 1.
    Green = 1,
    /// Blue, index 2.
    Blue = 2,
}

impl Channel {
    /// All channels in interleaved order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel within an RGB pixel.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase channel name.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Pure display color for this channel, used when plotting.
    pub const fn display_color(self) -> [u8; 3] {
        match self {
            Channel::Red => [255, 0, 0],
            Channel::Green => [0, 128, 0],
            Channel::Blue => [0, 0, 255],
        }
    }

    /// Channel at `index`, or `None` past blue.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Channel::Red),
            1 => Some(Channel::Green),
            2 => Some(Channel::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
