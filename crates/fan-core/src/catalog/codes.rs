//! Learned Pronto codes for the fan's remote control.
//!
//! All five codes were captured from the fan's handheld remote.  They share
//! the same shape: raw format, frequency code `006F`, no "once" pairs, and 36
//! (`0x24`) "repeat" pairs, i.e. 72 mark/space groups after the header.

/// `on` button.
pub const ON: &str = "0000 006F 0000 0024 002F 0010 002F 0010 0010 0031 002F 0011 \
    002F 0010 0010 0031 000F 0031 0010 0030 0010 0031 000F 0031 \
    002F 0010 0010 012E 0030 0010 0030 0010 000F 0031 002F 0010 \
    0030 0011 000F 0030 0010 002F 0010 0031 000F 0031 0010 0030 \
    0030 0010 000F 012E 0030 0010 002F 0010 0010 0031 002F 0011 \
    002F 0010 0010 002F 0010 0031 000F 0030 0010 002F 0010 0031 \
    002F 0010 0010 0F3C";

/// `swing` button.
pub const SWING: &str = "0000 006F 0000 0024 002F 0010 002F 0012 000F 0031 002F 0010 \
    002F 0010 0010 0031 000F 0031 002F 0010 0010 0031 000F 0031 \
    0010 0030 0010 012E 0030 000F 0030 0010 000F 0031 002F 0011 \
    002F 0010 000F 0031 0010 0030 0030 0010 000F 0031 0010 0030 \
    0010 0031 000F 012F 002F 0010 002F 0010 0010 0031 002F 0011 \
    002F 0010 0010 0031 000F 0031 002F 0010 0010 0030 0010 0031 \
    000F 0031 0010 0F3E";

/// `timer` button.
pub const TIMER: &str = "0000 006F 0000 0024 002F 0010 002F 0011 000F 0030 002F 0010 \
    002F 0011 000F 0030 000F 0030 0010 002F 0030 0010 000F 0030 \
    0010 002F 0010 012D 0030 0010 002F 0010 000F 0030 002F 0011 \
    002F 0010 000F 0030 0010 0030 000F 0030 002F 0010 0010 002F \
    0010 0030 000F 012F 002F 0010 002F 0010 0010 0030 002F 0010 \
    002F 0010 0010 0030 000F 0030 000F 0030 002F 0011 000F 0030 \
    000F 0030 0010 0F38";

/// `wind` button.
pub const WIND: &str = "0000 006F 0000 0024 002F 0010 002F 0011 000F 0030 002F 0010 \
    002F 0011 000F 0030 000F 0030 0010 002F 0010 0030 002F 0010 \
    0010 002F 0010 012D 0030 0010 002F 0010 000F 0030 002F 0011 \
    002F 0010 000F 0030 0010 0030 000F 0030 000F 0030 002F 0010 \
    0010 0030 000F 012E 002F 0010 002F 0010 0010 0030 002F 0010 \
    002F 0010 0010 0030 000F 0030 000F 0030 0010 0030 002F 0010 \
    000F 0030 0010 0F37";

/// `off` button.
pub const OFF: &str = "0000 006F 0000 0024 002F 0010 002F 0011 000F 0031 002F 0011 \
    002F 0011 000F 0031 002F 0010 0010 0031 000F 0031 000F 0030 \
    0010 0030 0010 012E 0030 0010 002F 0010 000F 0031 002F 0011 \
    002F 0010 000F 0031 002F 0011 000F 0031 000F 0031 0010 0031 \
    000F 0031 000F 012F 002F 0010 002F 0011 0010 0031 002F 0010 \
    002F 0011 0010 0031 002F 0010 000F 0031 0010 0031 000F 0031 \
    000F 0030 0010 0F3E";
