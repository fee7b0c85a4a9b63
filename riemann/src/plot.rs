use riemann::Report;

const WIDTH: usize = 64;
const HEIGHT: usize = 20;

// character-cell rendition of what the canvas widget draws: shaded
// subinterval shapes under a sampled curve
pub fn draw(report: &Report, lower: f64, upper: f64) {
    // pad the y range a tenth each way so extremes stay visible; a flat
    // function still gets a unit of room
    let span = report.range.max - report.range.min;
    let span = if span == 0.0 { 1.0 } else { span };
    let min_y = report.range.min - span * 0.1;
    let max_y = report.range.max + span * 0.1;

    let x_at = |col: usize| lower + (upper - lower) * col as f64 / (WIDTH - 1) as f64;
    let row_of = |y: f64| -> Option<usize> {
        let frac = (y - min_y) / (max_y - min_y);
        if !(0.0..=1.0).contains(&frac) {
            return None;
        }
        Some(((1.0 - frac) * (HEIGHT - 1) as f64).round() as usize)
    };

    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

    if let Some(axis) = row_of(0.0) {
        for cell in grid[axis].iter_mut() {
            *cell = '─';
        }
    }

    // shade each column between the axis and the shape's top edge
    for col in 0..WIDTH {
        let x = x_at(col);
        for shape in &report.primitives {
            let (x0, x1) = shape.span();
            if x < x0 || x > x1 {
                continue;
            }
            let top = shape.top_at(x);
            let (lo, hi) = if top < 0.0 { (top, 0.0) } else { (0.0, top) };
            for (row, cells) in grid.iter_mut().enumerate() {
                let y = max_y - (max_y - min_y) * row as f64 / (HEIGHT - 1) as f64;
                if y >= lo && y <= hi {
                    cells[col] = '░';
                }
            }
        }
    }

    // overlay the curve where it evaluates
    for col in 0..WIDTH {
        if let Ok(y) = report.function.evaluate(x_at(col)) {
            if let Some(row) = row_of(y) {
                grid[row][col] = '∙';
            }
        }
    }

    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!("{:<32}{:>32}", format!("x={}", lower), format!("x={}", upper));
}
