use std::fmt;

use crate::symmetric_group::MAX_DEGREE;

// A point in the permuted domain. Points are numbered 1..=n.
// In the scheduling interpretation, point i is process slot i.
pub type Point = u16;

// A permutation is represented in "one-line" form.
// Specifically, it wraps a vector v where v[i] = j means that the permutation
// maps point i+1 to point j. Every value in 1..=degree appears exactly once.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Permutation {
    map: Vec<Point>,
}

// Every failure in this crate is some form of malformed input.
// Verification outcomes are booleans and reports, never errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    // A degree outside the supported range.
    BadDegree(usize),

    // A point outside the domain 1..=degree. Carries the point and the degree.
    BadPoint(Point, usize),

    // A sequence that is not a bijection on 1..=degree.
    NotBijective(String),

    // A cycle string we could not parse.
    BadCycleString(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadDegree(d) => {
                write!(
                    f,
                    "degree {} is unsupported; the group is only enumerable for degrees 1 through {}",
                    d, MAX_DEGREE
                )
            }
            Error::BadPoint(x, d) => {
                write!(f, "point {} is outside the domain 1..={}", x, d)
            }
            Error::NotBijective(s) => write!(f, "not a bijection: {}", s),
            Error::BadCycleString(s) => write!(f, "unparseable cycle string: {}", s),
        }
    }
}

impl Error {
    pub fn not_bijective(map: &[Point]) -> Error {
        Error::NotBijective(format!("{:?}", map))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Permutation {
    pub fn identity(degree: usize) -> Permutation {
        let mut map = Vec::new();
        for i in 1..=degree {
            map.push(i as Point);
        }
        Permutation { map }
    }

    // Constructs without validation. The caller guarantees the mapping is a bijection.
    pub(crate) fn from_parts(map: Vec<Point>) -> Permutation {
        Permutation { map }
    }

    // Constructs from one-line form, validating that the mapping is a
    // bijection on 1..=n where n is the length of the sequence.
    pub fn from_mapping(map: Vec<Point>) -> Result<Permutation> {
        if map.is_empty() {
            return Err(Error::BadDegree(0));
        }
        let mut seen = vec![false; map.len()];
        for &v in &map {
            if v < 1 || v as usize > map.len() {
                return Err(Error::not_bijective(&map));
            }
            if seen[(v - 1) as usize] {
                return Err(Error::not_bijective(&map));
            }
            seen[(v - 1) as usize] = true;
        }
        Ok(Permutation { map })
    }

    // The number of points being permuted.
    pub fn degree(&self) -> usize {
        self.map.len()
    }

    pub fn apply(&self, point: Point) -> Point {
        self.map[(point - 1) as usize]
    }

    // The composition applies the right permutation first, then the left:
    // (self ∘ other)(i) = self(other(i)).
    pub fn compose(&self, other: &Permutation) -> Permutation {
        assert_eq!(self.degree(), other.degree());
        let mut map = Vec::new();
        for &t in &other.map {
            map.push(self.apply(t));
        }
        Permutation { map }
    }

    pub fn invert(&self) -> Permutation {
        let mut map = vec![0; self.map.len()];
        for (i, &v) in self.map.iter().enumerate() {
            map[(v - 1) as usize] = (i + 1) as Point;
        }
        Permutation { map }
    }

    pub fn is_identity(&self) -> bool {
        for (i, &v) in self.map.iter().enumerate() {
            if v as usize != i + 1 {
                return false;
            }
        }
        true
    }

    // Repeated composition. Zero gives the identity, negative exponents
    // compose the inverse.
    pub fn power(&self, k: i64) -> Permutation {
        let mut result = Permutation::identity(self.degree());
        if k == 0 {
            return result;
        }
        let base = if k > 0 { self.clone() } else { self.invert() };
        for _ in 0..k.unsigned_abs() {
            result = result.compose(&base);
        }
        result
    }

    // The smallest k > 0 such that the k-th power is the identity.
    pub fn order(&self) -> usize {
        let mut current = self.clone();
        let mut k = 1;
        while !current.is_identity() {
            current = current.compose(self);
            k += 1;
        }
        k
    }

    // The cycle decomposition, smallest point of each cycle first.
    // Fixed points are dropped, so the identity decomposes to nothing.
    pub fn cycles(&self) -> Vec<Vec<Point>> {
        let mut visited = vec![false; self.map.len()];
        let mut cycles = Vec::new();
        for start in 1..=self.map.len() as Point {
            if visited[(start - 1) as usize] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            while !visited[(current - 1) as usize] {
                visited[(current - 1) as usize] = true;
                cycle.push(current);
                current = self.apply(current);
            }
            if cycle.len() > 1 {
                cycles.push(cycle);
            }
        }
        cycles
    }

    // Parses a permutation written as a composition of cycles in the
    // math-standard "(1 2 3)" form, indexed from 1.
    pub fn parse(degree: usize, s: &str) -> Result<Permutation> {
        if degree < 1 {
            return Err(Error::BadDegree(degree));
        }
        let trimmed = s.trim();
        if trimmed == "e" || trimmed.is_empty() {
            return Ok(Permutation::identity(degree));
        }
        if !trimmed.starts_with('(') {
            return Err(Error::BadCycleString(s.to_string()));
        }
        let mut result = Permutation::identity(degree);
        // Split on (
        for cycle in trimmed.split('(').skip(1) {
            let cycle = parse_cycle(degree, cycle, s)?;
            result = cycle.compose(&result);
        }
        Ok(result)
    }
}

// Parses a single cycle like "1 2 3)" into a permutation of the given degree.
fn parse_cycle(degree: usize, cycle: &str, whole: &str) -> Result<Permutation> {
    let cycle = cycle.replace(')', " ");
    let mut items: Vec<Point> = Vec::new();
    for part in cycle.split_whitespace() {
        let point: Point = part
            .parse()
            .map_err(|_| Error::BadCycleString(whole.to_string()))?;
        if point < 1 || point as usize > degree {
            return Err(Error::BadPoint(point, degree));
        }
        if items.contains(&point) {
            return Err(Error::BadCycleString(whole.to_string()));
        }
        items.push(point);
    }
    if items.is_empty() {
        return Err(Error::BadCycleString(whole.to_string()));
    }
    let mut result = Permutation::identity(degree);
    for i in 0..items.len() {
        let j = (i + 1) % items.len();
        result.map[(items[i] - 1) as usize] = items[j];
    }
    Ok(result)
}

// Cycle notation. The identity prints as "e".
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "e");
        }
        for cycle in cycles {
            write!(f, "(")?;
            for (i, point) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", point)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
