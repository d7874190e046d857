use std::str::FromStr;

use anyhow::Result;

use crate::{parse_number, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Constant(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// `new = lhs <operator> rhs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Operation {
    lhs: Operand,
    operator: Operator,
    rhs: Operand,
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::malformed_line(s, "an operation like 'new = old * 19'");
        let operand = |token: &str| match token {
            "old" => Ok(Operand::Old),
            n => parse_number(n).map(Operand::Constant),
        };

        let expression = s.strip_prefix("new = ").ok_or_else(malformed)?;
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        let &[lhs, operator, rhs] = &tokens[..] else {
            return Err(malformed());
        };
        let operator = match operator {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            _ => return Err(malformed()),
        };
        let rhs = operand(rhs)?;
        if operator == Operator::Divide && rhs == Operand::Constant(0) {
            return Err(malformed());
        }

        Ok(Self {
            lhs: operand(lhs)?,
            operator,
            rhs,
        })
    }
}

impl Operation {
    /// `None` when the worry level leaves `u64`.
    fn evaluate(&self, old: u64) -> Option<u64> {
        let value = |operand| match operand {
            Operand::Old => old,
            Operand::Constant(n) => n,
        };
        let (l, r) = (value(self.lhs), value(self.rhs));
        match self.operator {
            Operator::Add => l.checked_add(r),
            Operator::Subtract => l.checked_sub(r),
            Operator::Multiply => l.checked_mul(r),
            Operator::Divide => l.checked_div(r),
        }
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
    inspected: u64,
}

/// How worry levels are kept in check after each inspection.
#[derive(Debug, Clone, Copy)]
enum Relief {
    DivideByThree,
    /// Reduce modulo the lcm of all divisors, which keeps every divisibility test intact.
    Modulo(u64),
}

fn field<'a>(line: Option<&'a str>, prefix: &'static str) -> Result<&'a str, Error> {
    let line = line.ok_or_else(|| Error::malformed_line("", prefix))?;
    line.trim()
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| Error::malformed_line(line, prefix))
}

fn parse_monkeys(input: &str) -> Result<Vec<Monkey>, Error> {
    let input = input.replace("\r\n", "\n");
    let monkeys = input
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| -> Result<Monkey, Error> {
            let mut lines = block.trim().lines();
            field(lines.next(), "Monkey")?;
            let items = field(lines.next(), "Starting items:")?;
            let items = if items.is_empty() {
                Vec::new()
            } else {
                items.split(',').map(parse_number).collect::<Result<_, _>>()?
            };
            let operation = field(lines.next(), "Operation:")?.parse()?;
            let divisor = parse_number(field(lines.next(), "Test: divisible by")?)?;
            if divisor == 0 {
                return Err(Error::malformed_line(block, "a non-zero divisor"));
            }
            let if_true = parse_number(field(lines.next(), "If true: throw to monkey")?)?;
            let if_false = parse_number(field(lines.next(), "If false: throw to monkey")?)?;
            Ok(Monkey {
                items,
                operation,
                divisor,
                if_true,
                if_false,
                inspected: 0,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(monkey) = monkeys
        .iter()
        .find(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len())
    {
        return Err(Error::malformed_line(
            format!("{:?}", monkey),
            "throw targets naming existing monkeys",
        ));
    }
    Ok(monkeys)
}

fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: Relief) -> Result<u64, Error> {
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            monkeys[i].inspected += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[i];

            for item in items {
                let worry = operation.evaluate(item).ok_or_else(|| {
                    Error::Unreachable(format!("worry level {item} overflowed in {operation:?}"))
                })?;
                let worry = match relief {
                    Relief::DivideByThree => worry / 3,
                    Relief::Modulo(modulus) => worry % modulus,
                };
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }

    let mut inspected: Vec<u64> = monkeys.iter().map(|m| m.inspected).collect();
    inspected.sort_unstable_by(|a, b| b.cmp(a));
    Ok(inspected.iter().take(2).product())
}

pub fn day11(input: &str) -> Result<(u64, u64)> {
    let monkeys = parse_monkeys(input)?;
    let modulus = monkeys
        .iter()
        .fold(1, |acc, m| num::integer::lcm(acc, m.divisor));

    let part1 = monkey_business(monkeys.clone(), 20, Relief::DivideByThree)?;
    let part2 = monkey_business(monkeys, 10_000, Relief::Modulo(modulus))?;
    Ok((part1, part2))
}
