use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const PARTS: usize = 4;

/// How address parts are turned into integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum ParseMode {
    /// atoi-style: leading integer or 0, missing parts are 0, extra parts are ignored.
    #[default]
    Lenient,
    /// Exactly four plain decimal parts in 0..=255.
    Strict,
}

impl ParseMode {
    pub fn parse<S: AsRef<str>>(self, parts: &[S]) -> Result<Ipv4Address, String> {
        match self {
            ParseMode::Lenient => Ok(Ipv4Address::from_parts(parts)),
            ParseMode::Strict => Ipv4Address::try_from_parts(parts),
        }
    }
}

/// Four integer parts, compared left to right.
///
/// Parts are not range checked in lenient mode, so they are kept as `i32`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Ipv4Address {
    parts: [i32; PARTS],
}

impl Ipv4Address {
    pub fn new(parts: [i32; PARTS]) -> Self {
        Ipv4Address { parts }
    }

    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Self {
        let mut v = [0; PARTS];
        for (slot, part) in v.iter_mut().zip(parts) {
            *slot = atoi(part.as_ref());
        }
        Ipv4Address { parts: v }
    }

    pub fn try_from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, String> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$").expect("Not possible");
        }
        if parts.len() != PARTS {
            return Err(format!(
                "Address should have {} parts, found {}.",
                PARTS,
                parts.len()
            ));
        }
        let mut v = [0; PARTS];
        for (slot, part) in v.iter_mut().zip(parts) {
            let part = part.as_ref();
            if !RE.is_match(part) {
                return Err(format!("Invalid address part '{}'.", part));
            }
            *slot = part.parse::<i32>().map_err(|e| e.to_string())?;
        }
        Ok(Ipv4Address { parts: v })
    }

    /// Part at `index`, or -1 when there is no such part.
    pub fn part(&self, index: usize) -> i32 {
        self.parts.get(index).copied().unwrap_or(-1)
    }

    pub fn greater_than(&self, other: &Ipv4Address) -> bool {
        self > other
    }

    pub fn contains_part(&self, value: i32) -> bool {
        self.parts.contains(&value)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(ip: Ipv4Addr) -> Self {
        let [a, b, c, d] = ip.octets();
        Ipv4Address::new([a.into(), b.into(), c.into(), d.into()])
    }
}

impl FromStr for Ipv4Address {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        Ipv4Address::try_from_parts(&parts)
    }
}

impl Display for Ipv4Address {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let [a, b, c, d] = self.parts;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

/// Leading integer of `s` the way C `atoi` reads it, saturating on overflow.
pub fn atoi(s: &str) -> i32 {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[ \t\n\x0B\x0C\r]*([+-]?[0-9]+)").expect("Not possible");
    }
    match RE.captures(s).and_then(|c| c.get(1)) {
        Some(m) => {
            let v = m.as_str();
            v.parse::<i32>().unwrap_or(if v.starts_with('-') {
                i32::MIN
            } else {
                i32::MAX
            })
        }
        None => 0,
    }
}
