use std::str::FromStr;

pub struct LatLongFormat {
    pos_token: char,
    neg_token: char,
}

impl LatLongFormat {
    pub fn lat_format() -> Self {
        LatLongFormat {
            pos_token: 'N',
            neg_token: 'S',
        }
    }

    pub fn long_format() -> Self {
        LatLongFormat {
            pos_token: 'E',
            neg_token: 'W',
        }
    }

    fn dec_to_degree(&self, buff: &mut String, d: f64, bearing: char) {
        let mut deg = d.floor();
        let minsec = (d - deg) * 60.0;
        let mut min = minsec.floor();
        let mut sec = ((minsec - min) * 60.0).round();

        if sec >= 60.0 {
            sec = 0.0;
            min += 1.0;
        }
        if min >= 60.0 {
            min = 0.0;
            deg += 1.0;
        }

        buff.push_str(&format!(
            "{:02}\u{00b0}{:02}'{:02}\"{}",
            deg, min, sec, bearing
        ));
    }

    pub fn format(&self, number: f64) -> String {
        let token = if number < 0.0 {
            self.neg_token
        } else {
            self.pos_token
        };
        let mut buffer = String::new();
        self.dec_to_degree(&mut buffer, number.abs(), token);
        buffer
    }

    pub fn parse(&self, source: &str) -> Result<f64, &'static str> {
        let mut sign = 1.0;
        let mut deg = 0.0;
        let mut min = 0.0;
        let mut sec = 0.0;

        let work = source.trim();
        let last_char = work.chars().last().unwrap_or(' ');

        if last_char == self.neg_token {
            sign = -1.0;
        }

        let tokens: Vec<&str> = work
            .split(|c: char| {
                c.is_whitespace() || c == '\u{00b0}' || c == '"' || c == '\''
            })
            .filter(|token| !token.is_empty() && !token.chars().all(char::is_alphabetic))
            .collect();

        if let Some(deg_tok) = tokens.first() {
            deg = match f64::from_str(deg_tok) {
                Ok(num) => num,
                Err(_) => return Err("Invalid coordinate format"),
            };
            if deg > 180.0 {
                return Err("Out of range");
            }
        }

        if let Some(min_tok) = tokens.get(1) {
            min = match f64::from_str(min_tok) {
                Ok(num) => num,
                Err(_) => return Err("Invalid coordinate format"),
            };
            if min > 60.0 {
                return Err("Out of range");
            }
        }

        if let Some(sec_tok) = tokens.get(2) {
            sec = match f64::from_str(sec_tok) {
                Ok(num) => num,
                Err(_) => return Err("Invalid coordinate format"),
            };
            if sec > 60.0 {
                return Err("Out of range");
            }
        }

        Ok((deg + min / 60.0 + sec / 3600.0) * sign)
    }
}
