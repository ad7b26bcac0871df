use std::f64::consts::{FRAC_PI_2, PI};

const C1: f64 = 1e-3;
const C2: f64 = 1e-9;
const TOL: f64 = 1e-5;

/// Incomplete elliptic integral of the first kind F(phi | m)
///
/// Bulirsch (1965) as given by Snyder (1989), p. 239. At phi = ±π/2 the
/// complete integral K(m) is returned with the sign of phi, which is
/// infinite for m = 1.
pub fn elliptic_f(phi: f64, m: f64) -> f64 {
    let sp = phi.sin();
    let h = sp * sp;
    let mut k = (1.0 - m).sqrt();
    let signed = |r: f64| if sp < 0.0 { -r } else { r };

    if h >= 1.0 || phi.abs() == FRAC_PI_2 {
        if k <= TOL {
            return signed(f64::INFINITY);
        }

        let mut m = 1.0;
        let mut h = m;
        m += k;
        while (h - k).abs() > C1 * m {
            k = (h * k).sqrt();
            m /= 2.0;
            h = m;
            m += k;
        }
        return signed(PI / m);
    }

    if k <= TOL {
        return ((1.0 + sp) / (1.0 - sp)).ln() / 2.0;
    }

    // h == 0 gives y = inf, the loop then converges to atan(0) = 0
    let mut y = ((1.0 - h) / h).sqrt();
    let mut n = 0u32;
    let mut m = 1.0;
    let mut p = m * k;
    let mut g = m;
    m += k;
    y -= p / y;
    if y == 0.0 {
        y = C2 * p.sqrt();
    }

    while (g - k).abs() > C1 * g {
        k = 2.0 * p.sqrt();
        n += n;
        if y < 0.0 {
            n += 1;
        }
        p = m * k;
        g = m;
        m += k;
        y -= p / y;
        if y == 0.0 {
            y = C2 * p.sqrt();
        }
    }
    if y < 0.0 {
        n += 1;
    }

    signed(((m / y).atan() + PI * f64::from(n)) / m)
}
