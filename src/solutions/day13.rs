use std::{cmp::Ordering, slice, str::FromStr};

use anyhow::Result;
use serde_json::Value;

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Integer(u64),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Integer(a), Packet::Integer(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Integer(_), Packet::List(b)) => slice::from_ref(self).cmp(b.as_slice()),
            (Packet::List(a), Packet::Integer(_)) => a.as_slice().cmp(slice::from_ref(other)),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<Value> for Packet {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(Packet::Integer)
                .ok_or_else(|| Error::MalformedNumber(n.to_string())),
            Value::Array(items) => items
                .into_iter()
                .map(Packet::try_from)
                .collect::<Result<_, _>>()
                .map(Packet::List),
            other => Err(Error::malformed_line(
                other.to_string(),
                "packets made of integers and lists",
            )),
        }
    }
}

impl FromStr for Packet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value =
            serde_json::from_str(s).map_err(|_| Error::malformed_line(s, "a JSON packet"))?;
        value.try_into()
    }
}

fn divider(n: u64) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Integer(n)])])
}

pub fn parse_packets(input: &str) -> Result<Vec<Packet>, Error> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}

pub fn day13(input: &str) -> Result<(usize, usize)> {
    let packets = parse_packets(input)?;
    if packets.len() % 2 != 0 {
        let last = input.trim_end().lines().last().unwrap_or_default();
        return Err(Error::malformed_line(last, "packets in pairs").into());
    }

    let part1 = packets
        .chunks_exact(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < pair[1])
        .map(|(i, _)| i + 1)
        .sum();

    let dividers = [divider(2), divider(6)];
    let mut sorted: Vec<&Packet> = packets.iter().chain(&dividers).collect();
    sorted.sort_unstable();
    let part2 = dividers
        .iter()
        .map(|d| sorted.partition_point(|p| *p < d) + 1)
        .product();

    Ok((part1, part2))
}
