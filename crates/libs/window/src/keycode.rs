/// X11 keysym values the toolkit reports for special keys.
#[allow(non_upper_case_globals)]
pub mod keysym {
    pub const BackSpace: i32 = 0xff08;
    pub const Tab: i32 = 0xff09;
    pub const Return: i32 = 0xff0d;
    pub const Pause: i32 = 0xff13;
    pub const Scroll_Lock: i32 = 0xff14;
    pub const Escape: i32 = 0xff1b;
    pub const Home: i32 = 0xff50;
    pub const Left: i32 = 0xff51;
    pub const Up: i32 = 0xff52;
    pub const Right: i32 = 0xff53;
    pub const Down: i32 = 0xff54;
    pub const Page_Up: i32 = 0xff55;
    pub const Page_Down: i32 = 0xff56;
    pub const End: i32 = 0xff57;
    pub const Insert: i32 = 0xff63;
    pub const Num_Lock: i32 = 0xff7f;
    pub const KP_0: i32 = 0xffb0;
    pub const KP_9: i32 = 0xffb9;
    pub const F1: i32 = 0xffbe;
    pub const F12: i32 = 0xffc9;
    pub const Shift_L: i32 = 0xffe1;
    pub const Shift_R: i32 = 0xffe2;
    pub const Control_L: i32 = 0xffe3;
    pub const Control_R: i32 = 0xffe4;
    pub const Caps_Lock: i32 = 0xffe5;
    pub const Delete: i32 = 0xffff;

    pub const apostrophe: i32 = 0x27;
    pub const comma: i32 = 0x2c;
    pub const minus: i32 = 0x2d;
    pub const period: i32 = 0x2e;
    pub const slash: i32 = 0x2f;
    pub const semicolon: i32 = 0x3b;
    pub const equal: i32 = 0x3d;
    pub const A: i32 = 0x41;
    pub const V: i32 = 0x56;
    pub const Z: i32 = 0x5a;
    pub const bracketleft: i32 = 0x5b;
    pub const backslash: i32 = 0x5c;
    pub const bracketright: i32 = 0x5d;
    pub const grave: i32 = 0x60;
    pub const a: i32 = 0x61;
    pub const v: i32 = 0x76;
    pub const z: i32 = 0x7a;
}

/// Application key code.
///
/// The space is open: keysyms below 256 without a dedicated mapping pass
/// through unchanged, so this is a newtype rather than an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const UNKNOWN: Self = Self(-1);
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const PAUSE: Self = Self(19);
    pub const CAPS_LOCK: Self = Self(20);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const PAGE_UP: Self = Self(33);
    pub const PAGE_DOWN: Self = Self(34);
    pub const END: Self = Self(35);
    pub const HOME: Self = Self(36);
    pub const LEFT: Self = Self(37);
    pub const UP: Self = Self(38);
    pub const RIGHT: Self = Self(39);
    pub const DOWN: Self = Self(40);
    pub const INSERT: Self = Self(45);
    pub const DELETE: Self = Self(46);
    pub const NUM_0: Self = Self(48);
    pub const NUM_9: Self = Self(57);
    pub const A: Self = Self(65);
    pub const V: Self = Self(86);
    pub const Z: Self = Self(90);
    pub const NUMPAD_0: Self = Self(96);
    pub const NUMPAD_9: Self = Self(105);
    pub const FN1: Self = Self(112);
    pub const FN12: Self = Self(123);
    pub const NUM_LOCK: Self = Self(144);
    pub const SCROLL_LOCK: Self = Self(145);
    pub const LEFT_SHIFT: Self = Self(160);
    pub const RIGHT_SHIFT: Self = Self(161);
    pub const LEFT_CTRL: Self = Self(162);
    pub const RIGHT_CTRL: Self = Self(163);
    pub const SEMICOLON: Self = Self(186);
    pub const EQUAL: Self = Self(187);
    pub const COMMA: Self = Self(188);
    pub const MINUS: Self = Self(189);
    pub const PERIOD: Self = Self(190);
    pub const SLASH: Self = Self(191);
    pub const GRAVE: Self = Self(192);
    pub const LEFT_BRACKET: Self = Self(219);
    pub const BACKSLASH: Self = Self(220);
    pub const RIGHT_BRACKET: Self = Self(221);
    pub const APOSTROPHE: Self = Self(222);

    /// Maps an X11 keysym to an application key code. Total over `i32`.
    pub fn from_keysym(sym: i32) -> Self {
        match sym {
            keysym::A..=keysym::Z => Self(sym - keysym::A + Self::A.0),
            keysym::a..=keysym::z => Self(sym - keysym::a + Self::A.0),
            keysym::F1..=keysym::F12 => Self(sym - keysym::F1 + Self::FN1.0),
            keysym::KP_0..=keysym::KP_9 => Self(sym - keysym::KP_0 + Self::NUMPAD_0.0),

            keysym::BackSpace => Self::BACKSPACE,
            keysym::Tab => Self::TAB,
            keysym::Return => Self::ENTER,
            keysym::Shift_L => Self::LEFT_SHIFT,
            keysym::Shift_R => Self::RIGHT_SHIFT,
            keysym::Control_L => Self::LEFT_CTRL,
            keysym::Control_R => Self::RIGHT_CTRL,
            keysym::Pause => Self::PAUSE,
            keysym::Caps_Lock => Self::CAPS_LOCK,
            keysym::Escape => Self::ESCAPE,
            keysym::Page_Up => Self::PAGE_UP,
            keysym::Page_Down => Self::PAGE_DOWN,
            keysym::End => Self::END,
            keysym::Home => Self::HOME,
            keysym::Left => Self::LEFT,
            keysym::Up => Self::UP,
            keysym::Right => Self::RIGHT,
            keysym::Down => Self::DOWN,
            keysym::Insert => Self::INSERT,
            keysym::Delete => Self::DELETE,
            keysym::Num_Lock => Self::NUM_LOCK,
            keysym::Scroll_Lock => Self::SCROLL_LOCK,
            keysym::semicolon => Self::SEMICOLON,
            keysym::equal => Self::EQUAL,
            keysym::comma => Self::COMMA,
            keysym::minus => Self::MINUS,
            keysym::period => Self::PERIOD,
            keysym::slash => Self::SLASH,
            keysym::grave => Self::GRAVE,
            keysym::bracketleft => Self::LEFT_BRACKET,
            keysym::backslash => Self::BACKSLASH,
            keysym::bracketright => Self::RIGHT_BRACKET,
            keysym::apostrophe => Self::APOSTROPHE,

            //latin1 overlaps the application codes below 256
            _ if sym < 256 => Self(sym),
            _ => Self::UNKNOWN,
        }
    }
}

impl From<i32> for KeyCode {
    fn from(sym: i32) -> Self {
        Self::from_keysym(sym)
    }
}
