/// Skew factor onto the simplex grid, `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_439;
/// Unskew factor back to input space, `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187;

const GRADIENTS: [[i8; 2]; 12] = [
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
    [-1, 0],
    [-1, -1],
    [0, -1],
    [1, -1],
    [1, 0],
    [0, 1],
    [-1, 0],
    [0, -1],
];

/// Seeded 2D simplex noise.
///
/// Samples are smooth in `x` and `y` and lie in `[-1, 1]`. The same seed yields the
/// same field on every platform.
#[derive(Clone)]
pub struct Noise {
    seed: u64,
    /// 256 shuffled entries, doubled so lookups never wrap.
    perm: [u8; 512],
}

impl Noise {
    pub fn seeded(seed: u64) -> Self {
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().take(256).enumerate() {
            *p = i as u8;
        }

        // xorshift64 has a fixed point at zero.
        let mut state = (seed ^ 0x9E37_79B9_7F4A_7C15).wrapping_mul(0x517C_C1B7_2722_0A95);
        if state == 0 {
            state = 0x2545_F491_4F6C_DD1D;
        }
        for i in (1..256).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }
        perm.copy_within(0..256, 256);

        Self { seed, perm }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the field with the one generated from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::seeded(seed);
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let (x, y) = (f64::from(x), f64::from(y));

        let skew = (x + y) * F2;
        let i = (x + skew).floor();
        let j = (y + skew).floor();

        let unskew = (i + j) * G2;
        let x0 = x - (i - unskew);
        let y0 = y - (j - unskew);

        // Lower or upper triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let g0 = self.hash(ii, jj);
        let g1 = self.hash(ii + i1, jj + j1);
        let g2 = self.hash(ii + 1, jj + 1);

        let n = corner(x0, y0, g0) + corner(x1, y1, g1) + corner(x2, y2, g2);
        // 70 maps the summed corner falloff onto [-1, 1].
        (70.0 * n).clamp(-1.0, 1.0) as f32
    }

    fn hash(&self, i: usize, j: usize) -> u8 {
        self.perm[(i + self.perm[j & 511] as usize) & 511]
    }
}

fn corner(x: f64, y: f64, hash: u8) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let g = GRADIENTS[(hash % 12) as usize];
    let t2 = t * t;
    t2 * t2 * (x * f64::from(g[0]) + y * f64::from(g[1]))
}

impl Default for Noise {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl std::fmt::Debug for Noise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Noise").field("seed", &self.seed).finish_non_exhaustive()
    }
}
