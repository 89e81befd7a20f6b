/// how a table row's CFF gets built: a construction tag plus the
/// integer parameters needed to rebuild it, either directly or from
/// other rows of the same context. recipes are plain values, so a
/// planned table is just numbers and the single consumer is the
/// materialiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// diagonal matrix with the given side
    Identity(usize),
    /// sperner system with the given column count
    Sperner(u64),
    /// steiner triple system of the given order
    Sts(usize),
    /// porat-rothschild code; r is the cover-free degree plus one
    PoratRothschild { p: usize, a: usize, k: usize, r: usize, m: usize },
    /// reed-solomon code over F_{p^a}
    ReedSolomon { p: usize, a: usize, k: usize, m: usize },
    /// reed-solomon code shortened s times
    ShortReedSolomon { p: usize, a: usize, k: usize, m: usize, s: usize },
    /// catalogued constant-weight code with the given row count
    Fixed(usize),
    /// one more row and column on top of the given row
    ExtendByOne(usize),
    /// block-diagonal sum of two rows
    Additive(usize, usize),
    /// column doubling of a row, with s balanced rows in between
    Doubling(usize, usize),
    /// kronecker product of two rows
    Kronecker(usize, usize),
    /// optimized kronecker; outer indexes the table one d below
    OptKronecker { inner: usize, bottom: usize, outer: usize },
}

impl Recipe {
    /// construction family name, as written in the csv catalogue
    pub fn source(&self) -> &'static str {
        match self {
            Self::Identity(_) => "ID",
            Self::Sperner(_) => "Sperner",
            Self::Sts(_) => "STS",
            Self::PoratRothschild { .. } => "Porat and Rothschild",
            Self::ReedSolomon { .. } => "Reed-Solomon",
            Self::ShortReedSolomon { .. } => "Shortened Reed-Solomon",
            Self::Fixed(_) => "Constant-weight binary code",
            Self::ExtendByOne(_) => "Extension by one",
            Self::Additive(..) => "Additive",
            Self::Doubling(..) => "Doubling",
            Self::Kronecker(..) => "Kronecker",
            Self::OptKronecker { .. } => "Optimized Kronecker",
        }
    }
}

/// parameterised notation for the csv catalogue, e.g. RS(5^1;2;4)
impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Identity(t) => write!(f, "ID({})", t),
            Self::Sperner(n) => write!(f, "Sp({})", n),
            Self::Sts(v) => write!(f, "STS({})", v),
            Self::PoratRothschild { p, a, k, r, .. } => write!(f, "PR({};{};{};{})", p, a, k, r),
            Self::ReedSolomon { p, a, k, m } => write!(f, "RS({}^{};{};{})", p, a, k, m),
            Self::ShortReedSolomon { p, a, k, m, s } => {
                write!(f, "SRS({};{};{};{};{})", p, a, k, m, s)
            }
            Self::Fixed(t) => write!(f, "Survey CFF {}", t),
            Self::ExtendByOne(t) => write!(f, "Extension by one of {}", t),
            Self::Additive(t1, t2) => write!(f, "Add({};{})", t1, t2),
            Self::Doubling(t, s) => write!(f, "Dbl({};{})", t, s),
            Self::Kronecker(t1, t2) => write!(f, "Kr({};{})", t1, t2),
            Self::OptKronecker { inner, bottom, outer } => {
                write!(f, "OKr({};{};{})", inner, bottom, outer)
            }
        }
    }
}
