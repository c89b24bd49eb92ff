use once_cell::sync::Lazy;

use crate::die::Die;

pub static D2: Lazy<Die> = Lazy::new(|| die(2));
pub static D3: Lazy<Die> = Lazy::new(|| die(3));
pub static D4: Lazy<Die> = Lazy::new(|| die(4));
pub static D6: Lazy<Die> = Lazy::new(|| die(6));
pub static D8: Lazy<Die> = Lazy::new(|| die(8));
pub static D10: Lazy<Die> = Lazy::new(|| die(10));
pub static D12: Lazy<Die> = Lazy::new(|| die(12));
pub static D20: Lazy<Die> = Lazy::new(|| die(20));
pub static D100: Lazy<Die> = Lazy::new(|| die(100));

#[must_use]
pub fn die(faces: usize) -> Die {
    assert!(faces >= 1, "a die needs at least one face");
    if faces == 2 {
        Die::fixed(["H", "T"])
    } else {
        Die::fixed((1..=faces).map(|x| x.to_string()))
    }
}

pub fn d2() -> Die {
    D2.clone()
}

pub fn d3() -> Die {
    D3.clone()
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

pub fn d100() -> Die {
    D100.clone()
}

#[cfg(test)]
mod tests {
    use super::die;

    #[test]
    fn coin_faces_are_heads_and_tails() {
        assert_eq!(die(2).faces(), ["H", "T"]);
    }

    #[test]
    fn larger_dice_count_from_one() {
        assert_eq!(die(6).faces(), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(die(1).faces(), ["1"]);
    }
}
