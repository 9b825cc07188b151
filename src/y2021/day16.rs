use anyhow::{Context, bail, ensure};

use crate::{Answer, Result};

struct Packet {
    version: u64,
    type_id: u64,
    value: u64,
    children: Vec<Packet>,
}

struct Bits {
    bits: Vec<u8>,
    pos: usize,
}

impl Bits {
    fn from_hex(s: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(s.len() * 4);
        for c in s.trim().chars() {
            let v = c.to_digit(16).with_context(|| format!("bad hex digit {:?}", c))?;
            bits.extend((0..4).rev().map(|i| (v >> i & 1) as u8));
        }
        Ok(Self { bits, pos: 0 })
    }

    fn read(&mut self, n: usize) -> Result<u64> {
        ensure!(self.pos + n <= self.bits.len(), "packet truncated");
        let v = self.bits[self.pos..self.pos + n]
            .iter()
            .fold(0, |acc, &b| acc << 1 | b as u64);
        self.pos += n;
        Ok(v)
    }

    fn packet(&mut self) -> Result<Packet> {
        let version = self.read(3)?;
        let type_id = self.read(3)?;
        let mut packet = Packet {
            version,
            type_id,
            value: 0,
            children: vec![],
        };
        if type_id == 4 {
            loop {
                let group = self.read(5)?;
                packet.value = packet.value << 4 | (group & 0xf);
                if group & 0x10 == 0 {
                    break;
                }
            }
        } else if self.read(1)? == 0 {
            let len = self.read(15)? as usize;
            let end = self.pos + len;
            while self.pos < end {
                packet.children.push(self.packet()?);
            }
        } else {
            let count = self.read(11)?;
            for _ in 0..count {
                packet.children.push(self.packet()?);
            }
        }
        Ok(packet)
    }
}

impl Packet {
    fn version_sum(&self) -> u64 {
        self.version + self.children.iter().map(Packet::version_sum).sum::<u64>()
    }

    fn eval(&self) -> Result<u64> {
        let vals = self
            .children
            .iter()
            .map(Packet::eval)
            .collect::<Result<Vec<_>>>()?;
        let cmp = |f: fn(&u64, &u64) -> bool| -> Result<u64> {
            ensure!(vals.len() == 2, "comparison needs two operands");
            Ok(f(&vals[0], &vals[1]) as u64)
        };
        Ok(match self.type_id {
            0 => vals.iter().sum(),
            1 => vals.iter().product(),
            2 => *vals.iter().min().context("min of nothing")?,
            3 => *vals.iter().max().context("max of nothing")?,
            4 => self.value,
            5 => cmp(u64::gt)?,
            6 => cmp(u64::lt)?,
            7 => cmp(u64::eq)?,
            t => bail!("unknown type id {}", t),
        })
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let packet = Bits::from_hex(input)?.packet()?;
    Ok(packet.version_sum().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let packet = Bits::from_hex(input)?.packet()?;
    Ok(packet.eval()?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal() {
        let p = Bits::from_hex("D2FE28").unwrap().packet().unwrap();
        assert_eq!(p.value, 2021);
    }

    #[test]
    fn version_sums() {
        assert_eq!(task1("8A004A801A8002F478").unwrap(), 16.into());
        assert_eq!(task1("620080001611562C8802118E34").unwrap(), 12.into());
        assert_eq!(task1("C0015000016115A2E0802F182340").unwrap(), 23.into());
        assert_eq!(task1("A0016C880162017C3686B18A3D4780").unwrap(), 31.into());
    }

    #[test]
    fn expressions() {
        assert_eq!(task2("C200B40A82").unwrap(), 3.into());
        assert_eq!(task2("04005AC33890").unwrap(), 54.into());
        assert_eq!(task2("880086C3E88112").unwrap(), 7.into());
        assert_eq!(task2("CE00C43D881120").unwrap(), 9.into());
        assert_eq!(task2("D8005AC2A8F0").unwrap(), 1.into());
        assert_eq!(task2("F600BC2D8F").unwrap(), 0.into());
        assert_eq!(task2("9C005AC2F8F0").unwrap(), 0.into());
        assert_eq!(task2("9C0141080250320F1802104A08").unwrap(), 1.into());
    }
}
