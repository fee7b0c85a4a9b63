use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rule {
    Left,
    Right,
    Midpoint,
    Trapezoidal,
}

impl Rule {
    pub const ALL: [Rule; 4] = [Rule::Left, Rule::Right, Rule::Midpoint, Rule::Trapezoidal];

    // display names, advisory metadata for the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            Rule::Left => "Left Riemann Sum",
            Rule::Right => "Right Riemann Sum",
            Rule::Midpoint => "Midpoint Rule",
            Rule::Trapezoidal => "Trapezoidal Rule",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Rule::Left => {
                "Uses the left endpoint of each subinterval to determine the height of rectangles."
            }
            Rule::Right => {
                "Uses the right endpoint of each subinterval to determine the height of rectangles."
            }
            Rule::Midpoint => {
                "Uses the midpoint of each subinterval to determine the height of rectangles. \
                 Often more accurate than left/right sums."
            }
            Rule::Trapezoidal => {
                "Approximates the area using trapezoids. \
                 Generally more accurate than rectangle methods."
            }
        }
    }
}

impl FromStr for Rule {
    type Err = String;
    fn from_str(s: &str) -> Result<Rule, String> {
        match s {
            "left" => Ok(Rule::Left),
            "right" => Ok(Rule::Right),
            "midpoint" => Ok(Rule::Midpoint),
            "trapezoidal" => Ok(Rule::Trapezoidal),
            other => Err(format!("unknown rule: {}", other)),
        }
    }
}
