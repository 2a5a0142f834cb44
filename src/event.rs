//! # Window Messages
//!
//! Typed view of the Win32 messages the window reacts to. Decoding works on
//! plain integers so it is identical on every host; the Win32 shell passes
//! `msg`, `WPARAM.0` and `LPARAM.0` straight through.
//!
//! The `WM_*` codes below mirror `winuser.h`.

use crate::shape::PixelSize;

pub const WM_CREATE: u32 = 0x0001;
pub const WM_DESTROY: u32 = 0x0002;
pub const WM_SIZE: u32 = 0x0005;
pub const WM_PAINT: u32 = 0x000F;
pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_MOUSEWHEEL: u32 = 0x020A;
pub const WM_CAPTURECHANGED: u32 = 0x0215;
pub const WM_MOUSEHOVER: u32 = 0x02A1;
pub const WM_MOUSELEAVE: u32 = 0x02A3;

/// Key and button state carried in the `wparam` of mouse messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierKeys(u16);

impl ModifierKeys {
    pub const LBUTTON: ModifierKeys = ModifierKeys(0x0001);
    pub const RBUTTON: ModifierKeys = ModifierKeys(0x0002);
    pub const SHIFT: ModifierKeys = ModifierKeys(0x0004);
    pub const CONTROL: ModifierKeys = ModifierKeys(0x0008);
    pub const MBUTTON: ModifierKeys = ModifierKeys(0x0010);

    pub const fn empty() -> Self {
        ModifierKeys(0)
    }

    pub const fn from_bits(bits: u16) -> Self {
        ModifierKeys(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: ModifierKeys) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn primary_down(self) -> bool {
        self.contains(Self::LBUTTON)
    }
}

impl std::ops::BitOr for ModifierKeys {
    type Output = ModifierKeys;

    fn bitor(self, rhs: Self) -> Self {
        ModifierKeys(self.0 | rhs.0)
    }
}

/// An undecoded message as the window procedure receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage {
    pub id: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl RawMessage {
    pub const fn new(id: u32, wparam: usize, lparam: isize) -> Self {
        Self { id, wparam, lparam }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Create,
    Destroy,
    Paint,
    /// New client-area size in pixels
    Resize(PixelSize),
    LeftButtonDown { x: i32, y: i32, keys: ModifierKeys },
    LeftButtonUp { x: i32, y: i32, keys: ModifierKeys },
    MouseMove { x: i32, y: i32, keys: ModifierKeys },
    /// Positive rotates away from the user
    MouseWheel { delta: i16, keys: ModifierKeys },
    MouseHover,
    MouseLeave,
    /// Another window took the mouse capture
    CaptureChanged,
}

impl Message {
    /// Decode a raw message. `None` means it should go to default processing.
    pub fn decode(raw: RawMessage) -> Option<Message> {
        let message = match raw.id {
            WM_CREATE => Message::Create,
            WM_DESTROY => Message::Destroy,
            WM_PAINT => Message::Paint,
            WM_SIZE => Message::Resize(PixelSize::new(
                low_word(raw.lparam as usize) as u32,
                high_word(raw.lparam as usize) as u32,
            )),
            WM_LBUTTONDOWN => {
                let (x, y) = point_from_lparam(raw.lparam);
                Message::LeftButtonDown { x, y, keys: keys_from_wparam(raw.wparam) }
            }
            WM_LBUTTONUP => {
                let (x, y) = point_from_lparam(raw.lparam);
                Message::LeftButtonUp { x, y, keys: keys_from_wparam(raw.wparam) }
            }
            WM_MOUSEMOVE => {
                let (x, y) = point_from_lparam(raw.lparam);
                Message::MouseMove { x, y, keys: keys_from_wparam(raw.wparam) }
            }
            WM_MOUSEWHEEL => Message::MouseWheel {
                delta: high_word(raw.wparam) as i16,
                keys: keys_from_wparam(raw.wparam),
            },
            WM_MOUSEHOVER => Message::MouseHover,
            WM_MOUSELEAVE => Message::MouseLeave,
            WM_CAPTURECHANGED => Message::CaptureChanged,
            _ => return None,
        };
        Some(message)
    }
}

fn low_word(v: usize) -> u16 {
    (v & 0xFFFF) as u16
}

fn high_word(v: usize) -> u16 {
    ((v >> 16) & 0xFFFF) as u16
}

/// Client coordinates are signed; they go negative while the mouse is
/// captured and outside the window.
fn point_from_lparam(lparam: isize) -> (i32, i32) {
    let v = lparam as usize;
    (low_word(v) as i16 as i32, high_word(v) as i16 as i32)
}

fn keys_from_wparam(wparam: usize) -> ModifierKeys {
    ModifierKeys::from_bits(low_word(wparam))
}

/// Pack a client point the way Windows does, for building raw messages.
pub fn make_point_lparam(x: i32, y: i32) -> isize {
    let lo = (x as i16 as u16) as u32;
    let hi = (y as i16 as u16) as u32;
    ((hi << 16) | lo) as i32 as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mouse_move() {
        let raw = RawMessage::new(WM_MOUSEMOVE, 0x0001, make_point_lparam(200, 150));
        assert_eq!(
            Message::decode(raw),
            Some(Message::MouseMove { x: 200, y: 150, keys: ModifierKeys::LBUTTON })
        );
    }

    #[test]
    fn test_decode_negative_coordinates() {
        let raw = RawMessage::new(WM_LBUTTONDOWN, 0, make_point_lparam(-12, -3));
        match Message::decode(raw) {
            Some(Message::LeftButtonDown { x, y, .. }) => assert_eq!((x, y), (-12, -3)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_decode_size() {
        let raw = RawMessage::new(WM_SIZE, 0, (600 << 16) | 800);
        assert_eq!(Message::decode(raw), Some(Message::Resize(PixelSize::new(800, 600))));
        let raw = RawMessage::new(WM_SIZE, 1, 0);
        assert_eq!(Message::decode(raw), Some(Message::Resize(PixelSize::new(0, 0))));
    }

    #[test]
    fn test_decode_wheel() {
        let back = (-120i16 as u16 as usize) << 16 | 0x0008;
        match Message::decode(RawMessage::new(WM_MOUSEWHEEL, back, 0)) {
            Some(Message::MouseWheel { delta, keys }) => {
                assert_eq!(delta, -120);
                assert!(keys.contains(ModifierKeys::CONTROL));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_message_is_default() {
        assert_eq!(Message::decode(RawMessage::new(0x0100, 0, 0)), None);
    }

    #[test]
    fn test_modifier_keys() {
        let keys = ModifierKeys::LBUTTON | ModifierKeys::SHIFT;
        assert!(keys.primary_down());
        assert!(keys.contains(ModifierKeys::SHIFT));
        assert!(!keys.contains(ModifierKeys::CONTROL));
        assert!(!ModifierKeys::empty().primary_down());
    }
}
