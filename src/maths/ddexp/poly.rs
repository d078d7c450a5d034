use super::dd::DoubleDouble;

// Minimax approximation of exp(z) on |z| <= ln(2)/64.
const C0: f64 = 1.0;
const C1: f64 = 1.0;
const C2: f64 = 5.00000000000032307490016592055326327681541442871093750e-01;
const C3: f64 = 1.66666666664336909908783468381443526595830917358398437500e-01;
const C4: f64 = 4.16666661063678778198493546369718387722969055175781250e-02;
const C5: f64 = 8.33337739276391979703628720699271070770919322967529296875e-03;
const C6: f64 = 1.39156772666044516173489142829566844739019870758056640625e-03;

/// `exp(z)` as `1 + z * p(z)` with the final addition kept exact.
/// The Horner order is part of the error analysis; do not reassociate.
#[inline(always)]
pub(crate) fn exp_poly_dd(z: f64) -> DoubleDouble {
    let p = C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6))));
    DoubleDouble::add12(C0, p * z)
}

/// Minimax approximation of exp(r) on |r| <= ln(2)/2, lowest degree first.
pub(crate) const FAST_COEFFS: [f64; 11] = [
    1.0,
    1.00000000000000643929354282590793445706367492675781250e+00,
    4.99999999999983513188084316425374709069728851318359375e-01,
    1.66666666665578222517041240280377678573131561279296875e-01,
    4.16666666679390979011188278491317760199308395385742187500e-02,
    8.33333338463836288678709962596258264966309070587158203125e-03,
    1.38888885906261988316401367882235717843286693096160888671875e-03,
    1.98411714150174687447750199176255136990221217274665832519531250e-04,
    2.48018422092243362301385717350044046725088264793157577514648437500e-05,
    2.76397570196414793205260534980638453816936817020177841186523437500e-06,
    2.75111392508451855531313940197990497438240709016099572181701660156250e-07,
];

#[inline(always)]
pub(crate) fn exp_poly_fast(r: f64) -> f64 {
    let mut p = FAST_COEFFS[10];
    for &c in FAST_COEFFS[..10].iter().rev() {
        p = c + p * r;
    }
    p
}
