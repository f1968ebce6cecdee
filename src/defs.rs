use once_cell::sync::Lazy;

use crate::die::Die;

pub static D2: Lazy<Die> = Lazy::new(|| Die::standard(2));
pub static D4: Lazy<Die> = Lazy::new(|| Die::standard(4));
pub static D6: Lazy<Die> = Lazy::new(|| Die::standard(6));
pub static D8: Lazy<Die> = Lazy::new(|| Die::standard(8));
pub static D10: Lazy<Die> = Lazy::new(|| Die::standard(10));
pub static D12: Lazy<Die> = Lazy::new(|| Die::standard(12));
pub static D20: Lazy<Die> = Lazy::new(|| Die::standard(20));

pub fn d2() -> Die {
    D2.clone()
}

pub fn d4() -> Die {
    D4.clone()
}

pub fn d6() -> Die {
    D6.clone()
}

pub fn d8() -> Die {
    D8.clone()
}

pub fn d10() -> Die {
    D10.clone()
}

pub fn d12() -> Die {
    D12.clone()
}

pub fn d20() -> Die {
    D20.clone()
}
