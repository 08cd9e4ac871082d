use crate::ipv4::{Ipv4Address, ParseMode};
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::rc::Rc;

/// Addresses in insertion (then sorted) order, plus three filtered views
/// sharing the same entries.
#[derive(Default)]
pub struct Ipv4Pool {
    inner: Vec<Rc<Ipv4Address>>,
    pub filter_1: Vec<Rc<Ipv4Address>>,
    pub filter_2: Vec<Rc<Ipv4Address>>,
    pub filter_3: Vec<Rc<Ipv4Address>>,
}

impl Ipv4Pool {
    pub fn new() -> Self {
        Ipv4Pool::default()
    }

    pub fn add<S: AsRef<str>>(&mut self, parts: &[S]) {
        self.push(Ipv4Address::from_parts(parts));
    }

    pub fn add_with<S: AsRef<str>>(&mut self, parts: &[S], mode: ParseMode) -> Result<(), String> {
        self.push(mode.parse(parts)?);
        Ok(())
    }

    pub fn push(&mut self, ip: Ipv4Address) {
        self.inner.push(Rc::new(ip));
    }

    /// Descending; equal addresses keep no particular order.
    pub fn sort(&mut self) {
        self.inner.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Rebuild the three views from the current order of the pool.
    pub fn filter(&mut self) {
        self.filter_1.clear();
        self.filter_2.clear();
        self.filter_3.clear();
        for ip in self.inner.iter() {
            if ip.part(0) == 1 {
                self.filter_1.push(Rc::clone(ip));
            }
            if ip.part(0) == 46 && ip.part(1) == 70 {
                self.filter_2.push(Rc::clone(ip));
            }
            if ip.contains_part(46) {
                self.filter_3.push(Rc::clone(ip));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ipv4Address> {
        self.inner.iter().map(|ip| ip.as_ref())
    }
}

fn write_lines(f: &mut Formatter, ips: &[Rc<Ipv4Address>]) -> Result<(), Error> {
    for ip in ips {
        writeln!(f, "{}", ip)?;
    }
    Ok(())
}

/// The whole pool, then each filter, one address per line.
impl Display for Ipv4Pool {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write_lines(f, &self.inner)?;
        write_lines(f, &self.filter_1)?;
        write_lines(f, &self.filter_2)?;
        write_lines(f, &self.filter_3)
    }
}
