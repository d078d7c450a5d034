use super::dd::DoubleDouble;

/// `2^(i/32)` for `i` in `0..32`, as double-doubles.
static TWO_POWER_INDEX: [DoubleDouble; 32] = [
    DoubleDouble::new(1.0, 0.0),
    DoubleDouble::new(1.021897148654116627, 5.109225028973443893e-17),
    DoubleDouble::new(1.0442737824274137548, 8.551889705537964892e-17),
    DoubleDouble::new(1.067140400676823697, -7.899853966841582122e-17),
    DoubleDouble::new(1.0905077326652576897, -3.046782079812471147e-17),
    DoubleDouble::new(1.114386742595892432, 1.0410278456845570955e-16),
    DoubleDouble::new(1.1387886347566915646, 8.912812676025407777e-17),
    DoubleDouble::new(1.1637248587775774755, 3.8292048369240934987e-17),
    DoubleDouble::new(1.1892071150027210269, 3.982015231465646111e-17),
    DoubleDouble::new(1.2152473599804689552, -7.71263069268148813e-17),
    DoubleDouble::new(1.241857812073484002, 4.658027591836936791e-17),
    DoubleDouble::new(1.2690509571917332199, 2.667932131342186095e-18),
    DoubleDouble::new(1.2968395546510096406, 2.5382502794888314959e-17),
    DoubleDouble::new(1.3252366431597413232, -2.858731210038861373e-17),
    DoubleDouble::new(1.3542555469368926513, 7.700948379802989461e-17),
    DoubleDouble::new(1.3839098819638320226, -6.770511658794786287e-17),
    DoubleDouble::new(1.4142135623730951455, -9.66729331345291345e-17),
    DoubleDouble::new(1.4451808069770466503, -3.023758134993987319e-17),
    DoubleDouble::new(1.4768261459394993462, -3.4839945568927957958e-17),
    DoubleDouble::new(1.5091644275934228414, -1.016455327754295039e-16),
    DoubleDouble::new(1.542210825407940744, 7.949834809697620856e-17),
    DoubleDouble::new(1.5759808451078864966, -1.013691647127830398e-17),
    DoubleDouble::new(1.6104903319492542835, 2.470719256979788785e-17),
    DoubleDouble::new(1.6457554781539649458, -1.0125679913674772604e-16),
    DoubleDouble::new(1.681792830507429004, 8.19901002058149652e-17),
    DoubleDouble::new(1.718619298122477934, -1.851380418263110988e-17),
    DoubleDouble::new(1.7562521603732994535, 2.960140695448873307e-17),
    DoubleDouble::new(1.794709075003107168, 1.822745842791208677e-17),
    DoubleDouble::new(1.8340080864093424307, 3.283107224245627203e-17),
    DoubleDouble::new(1.8741676341102999626, -6.122763413004142561e-17),
    DoubleDouble::new(1.9152065613971474, -1.0619946056195962638e-16),
    DoubleDouble::new(1.9571441241754001794, 8.960767791036667767e-17),
];

/// `2^(idx/32)`; `idx` must be below 32.
#[inline(always)]
pub(crate) fn two_power_index(idx: usize) -> DoubleDouble {
    TWO_POWER_INDEX[idx]
}
