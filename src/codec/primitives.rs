use super::layout::{Field, Frame};
use super::message::{Pose, Vec2};
use super::traits::{WireRead, WireWrite};

macro_rules! impl_primitive {
    ($type:ty, $bytes:expr) => {
        impl WireWrite for $type {
            fn write_at(&self, frame: &mut Frame, field: Field) {
                debug_assert_eq!(field.size, $bytes);
                frame[field.range()].copy_from_slice(&self.to_le_bytes());
            }
        }

        impl WireRead for $type {
            fn read_at(frame: &Frame, field: Field) -> Self {
                let mut buf = [0u8; $bytes];
                buf.copy_from_slice(&frame[field.range()]);
                <$type>::from_le_bytes(buf)
            }
        }
    };
}

impl_primitive!(u8, 1);
impl_primitive!(u16, 2);
impl_primitive!(i16, 2);
impl_primitive!(f32, 4);

// Boolean: 1 byte (0x00 = false, 0x01 = true). Reading is strict and lives in
// the decoder.
impl WireWrite for bool {
    fn write_at(&self, frame: &mut Frame, field: Field) {
        u8::from(*self).write_at(frame, field);
    }
}

impl WireWrite for [u8; 4] {
    fn write_at(&self, frame: &mut Frame, field: Field) {
        frame[field.range()].copy_from_slice(self);
    }
}

impl WireRead for [u8; 4] {
    fn read_at(frame: &Frame, field: Field) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&frame[field.range()]);
        buf
    }
}

impl WireWrite for Vec2 {
    fn write_at(&self, frame: &mut Frame, field: Field) {
        self.x.write_at(frame, field.element(0, 4));
        self.y.write_at(frame, field.element(1, 4));
    }
}

impl WireRead for Vec2 {
    fn read_at(frame: &Frame, field: Field) -> Self {
        Vec2 {
            x: f32::read_at(frame, field.element(0, 4)),
            y: f32::read_at(frame, field.element(1, 4)),
        }
    }
}

impl WireWrite for Pose {
    fn write_at(&self, frame: &mut Frame, field: Field) {
        self.x.write_at(frame, field.element(0, 4));
        self.y.write_at(frame, field.element(1, 4));
        self.theta.write_at(frame, field.element(2, 4));
    }
}

impl WireRead for Pose {
    fn read_at(frame: &Frame, field: Field) -> Self {
        Pose {
            x: f32::read_at(frame, field.element(0, 4)),
            y: f32::read_at(frame, field.element(1, 4)),
            theta: f32::read_at(frame, field.element(2, 4)),
        }
    }
}
