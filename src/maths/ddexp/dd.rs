/// Unevaluated sum `hi + lo` of two doubles, with `|lo| <= ulp(hi) / 2` when
/// produced by the normalising operations below.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

/// 2^27 + 1, splits a double into two 26-bit halves.
const SPLITTER: f64 = 134_217_729.0;

impl DoubleDouble {
    #[inline]
    pub const fn new(hi: f64, lo: f64) -> Self {
        DoubleDouble { hi, lo }
    }

    #[inline]
    pub const fn from_f64(x: f64) -> Self {
        DoubleDouble::new(x, 0.0)
    }

    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Add12 (Fast2Sum). Exact when `|a| >= |b|` or `a == 0`.
    #[inline(always)]
    pub(crate) const fn add12(a: f64, b: f64) -> Self {
        let s = a + b;
        let z = s - a;
        DoubleDouble::new(s, b - z)
    }

    // Veltkamp split
    #[inline(always)]
    const fn split(a: f64) -> (f64, f64) {
        let p = a * SPLITTER;
        let hi = (a - p) + p;
        (hi, a - hi)
    }

    /// Mul12 (Dekker): `u * v` exactly, barring overflow in the split.
    #[inline(always)]
    pub(crate) const fn mul12(u: f64, v: f64) -> Self {
        let (u1, u2) = DoubleDouble::split(u);
        let (v1, v2) = DoubleDouble::split(v);
        let rh = u * v;
        let rl = (((u1 * v1 - rh) + (u1 * v2)) + (u2 * v1)) + (u2 * v2);
        DoubleDouble::new(rh, rl)
    }

    /// Mul122: double times double-double.
    #[inline(always)]
    pub(crate) const fn mul122(a: f64, b: DoubleDouble) -> Self {
        let t = DoubleDouble::mul12(a, b.hi);
        let t3 = a * b.lo;
        let t4 = t.lo + t3;
        DoubleDouble::add12(t.hi, t4)
    }

    /// Mul22: double-double product, the `lo * lo` term is dropped.
    #[inline(always)]
    pub(crate) const fn mul22(x: DoubleDouble, y: DoubleDouble) -> Self {
        let (u1, u2) = DoubleDouble::split(x.hi);
        let (v1, v2) = DoubleDouble::split(y.hi);
        let mh = x.hi * y.hi;
        let mut ml = (((u1 * v1 - mh) + (u1 * v2)) + (u2 * v1)) + (u2 * v2);
        ml += x.hi * y.lo + x.lo * y.hi;
        let zh = mh + ml;
        let zl = (mh - zh) + ml;
        DoubleDouble::new(zh, zl)
    }
}
