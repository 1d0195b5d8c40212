//! Static font-metric tables for the built-in PDF Helvetica faces.
//!
//! Widths are advance widths in 1/1000 em from the standard Helvetica AFM
//! files, covering ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32. Oblique shares the upright widths.

use serde::Serialize;

/// The built-in PDF fonts the resume uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Helvetica-Oblique
    Oblique,
}

/// Width used for characters outside the table
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica advance widths.
///
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

/// Helvetica-Bold advance widths, same layout as [`HELVETICA`].
#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

impl Font {
    const fn table(self) -> &'static [u16; 95] {
        match self {
            Self::Regular | Self::Oblique => &HELVETICA,
            Self::Bold => &HELVETICA_BOLD,
        }
    }

    /// Advance width of one character in 1/1000 em
    #[must_use]
    pub fn char_width(self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.table()[code - 32]
        } else {
            FALLBACK_WIDTH
        }
    }

    /// Rendered width of `text` in points at `size`
    #[must_use]
    pub fn measure(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size / 1000.0
    }
}
