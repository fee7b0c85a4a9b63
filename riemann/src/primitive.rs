// One drawable shape per subinterval, corners in the function's own (x, y)
// space ordered bottom-left, bottom-right, top-right, top-left. The bottom
// edge always sits on the x axis; the renderer owns the screen transform.
#[derive(Clone, PartialEq, Debug)]
pub struct Primitive(pub [(f64, f64); 4]);

impl Primitive {
    pub fn rect(x0: f64, x1: f64, height: f64) -> Primitive {
        Primitive([(x0, 0.0), (x1, 0.0), (x1, height), (x0, height)])
    }

    pub fn trapezoid(x0: f64, y0: f64, x1: f64, y1: f64) -> Primitive {
        Primitive([(x0, 0.0), (x1, 0.0), (x1, y1), (x0, y0)])
    }

    // signed contribution to the integral: width times mean top-edge height
    pub fn signed_area(&self) -> f64 {
        let [(x0, _), (x1, _), (_, y1), (_, y0)] = self.0;
        (x1 - x0) * (y0 + y1) / 2.0
    }

    // x extent of the subinterval this shape covers
    pub fn span(&self) -> (f64, f64) {
        (self.0[0].0, self.0[1].0)
    }

    // height of the top edge at a given x, interpolated for trapezoids
    pub fn top_at(&self, x: f64) -> f64 {
        let [(x0, _), (x1, _), (_, y1), (_, y0)] = self.0;
        if x1 == x0 {
            return y0;
        }
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}
