use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::SimplexCache;
use crate::shape::DistanceProxy;

/// A vertex of the Minkowski difference `B - A`, remembering which proxy
/// vertices produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimplexVertex {
    /// Support point on the first proxy, in world-space.
    pub wa: Point<Real>,
    /// Support point on the second proxy, in world-space.
    pub wb: Point<Real>,
    /// `wb - wa`.
    pub w: Vector<Real>,
    /// Barycentric coordinate of the closest point.
    pub a: Real,
    /// Index of `wa` on the first proxy.
    pub index_a: usize,
    /// Index of `wb` on the second proxy.
    pub index_b: usize,
}

impl SimplexVertex {
    /// Computes the world-space support points for the given vertex indices.
    pub fn new(
        proxy_a: &DistanceProxy,
        xf_a: &Isometry<Real>,
        index_a: usize,
        proxy_b: &DistanceProxy,
        xf_b: &Isometry<Real>,
        index_b: usize,
    ) -> Self {
        let wa = xf_a * proxy_a.vertex(index_a);
        let wb = xf_b * proxy_b.vertex(index_b);

        Self {
            wa,
            wb,
            w: wb - wa,
            a: 1.0,
            index_a,
            index_b,
        }
    }
}

/// A simplex of dimension up to 2 on the Minkowski difference of two
/// indexed point clouds, reduced through barycentric coordinates.
#[derive(Clone, Debug)]
pub struct IndexedSimplex {
    vertices: [SimplexVertex; 3],
    count: usize,
}

impl IndexedSimplex {
    /// Initializes a simplex from the warm-start `cache`.
    ///
    /// The cache is flushed if its vertices are out of bounds or if the
    /// metric of the rebuilt simplex differs too much from the cached one.
    pub fn from_cache(
        cache: &SimplexCache,
        proxy_a: &DistanceProxy,
        xf_a: &Isometry<Real>,
        proxy_b: &DistanceProxy,
        xf_b: &Isometry<Real>,
    ) -> Self {
        let first = SimplexVertex::new(proxy_a, xf_a, 0, proxy_b, xf_b, 0);
        let mut result = Self {
            vertices: [first; 3],
            count: 0,
        };

        let in_bounds = cache.count <= 3
            && cache.indices_a().iter().all(|i| *i < proxy_a.len())
            && cache.indices_b().iter().all(|i| *i < proxy_b.len());

        if in_bounds {
            for i in 0..cache.count {
                result.vertices[i] = SimplexVertex::new(
                    proxy_a,
                    xf_a,
                    cache.index_a[i],
                    proxy_b,
                    xf_b,
                    cache.index_b[i],
                );
            }
            result.count = cache.count;

            // Flush the simplex if its metric changed a lot.
            if result.count > 1 {
                let metric1 = cache.metric;
                let metric2 = result.metric();
                if metric2 < 0.5 * metric1 || 2.0 * metric1 < metric2 || metric2 < DEFAULT_EPSILON
                {
                    result.count = 0;
                }
            }
        }

        if result.count == 0 {
            result.vertices[0] = first;
            result.count = 1;
        }

        result
    }

    /// Stores the vertex indices of this simplex into `cache`.
    pub fn write_cache(&self, cache: &mut SimplexCache) {
        cache.metric = self.metric();
        cache.count = self.count;

        for (i, v) in self.vertices().iter().enumerate() {
            cache.index_a[i] = v.index_a;
            cache.index_b[i] = v.index_b;
        }
    }

    /// The vertices of this simplex.
    #[inline]
    pub fn vertices(&self) -> &[SimplexVertex] {
        &self.vertices[..self.count]
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Appends a vertex to this simplex.
    ///
    /// Panics if the simplex is already a triangle.
    pub fn push(&mut self, vertex: SimplexVertex) {
        assert!(self.count < 3, "The simplex is full.");
        self.vertices[self.count] = vertex;
        self.count += 1;
    }

    /// The direction in which the next support point should be searched.
    pub fn search_direction(&self) -> Vector<Real> {
        match self.count {
            1 => -self.vertices[0].w,
            2 => {
                let e12 = self.vertices[1].w - self.vertices[0].w;
                let sgn = e12.perp(&-self.vertices[0].w);

                if sgn > 0.0 {
                    // Origin is left of e12.
                    Vector::new(-e12.y, e12.x)
                } else {
                    // Origin is right of e12.
                    Vector::new(e12.y, -e12.x)
                }
            }
            _ => Vector::zeros(),
        }
    }

    /// The world-space witness points on both proxies.
    pub fn witness_points(&self) -> (Point<Real>, Point<Real>) {
        let [v1, v2, v3] = &self.vertices;

        match self.count {
            1 => (v1.wa, v1.wb),
            2 => (
                Point::from(v1.wa.coords * v1.a + v2.wa.coords * v2.a),
                Point::from(v1.wb.coords * v1.a + v2.wb.coords * v2.a),
            ),
            _ => {
                let pa = Point::from(v1.wa.coords * v1.a + v2.wa.coords * v2.a + v3.wa.coords * v3.a);
                (pa, pa)
            }
        }
    }

    /// Length of a segment simplex, or signed area of a triangle simplex.
    pub fn metric(&self) -> Real {
        let [v1, v2, v3] = &self.vertices;

        match self.count {
            2 => (v1.w - v2.w).norm(),
            3 => (v2.w - v1.w).perp(&(v3.w - v1.w)),
            _ => 0.0,
        }
    }

    /// Reduces this simplex to the smallest sub-simplex containing the point
    /// closest to the origin, and computes its barycentric coordinates.
    pub fn solve(&mut self) {
        match self.count {
            2 => self.solve2(),
            3 => self.solve3(),
            _ => {}
        }
    }

    // Solve a line segment using barycentric coordinates.
    //
    // p = a1 * w1 + a2 * w2
    // a1 + a2 = 1
    //
    // The vector from the origin to the closest point on the line is
    // perpendicular to the line:
    // e12 = w2 - w1
    // dot(p, e) = 0
    // a1 * dot(w1, e) + a2 * dot(w2, e) = 0
    fn solve2(&mut self) {
        let w1 = self.vertices[0].w;
        let w2 = self.vertices[1].w;
        let e12 = w2 - w1;

        // w1 region
        let d12_2 = -w1.dot(&e12);
        if d12_2 <= 0.0 {
            // a2 <= 0, so we clamp it to 0
            self.vertices[0].a = 1.0;
            self.count = 1;
            return;
        }

        // w2 region
        let d12_1 = w2.dot(&e12);
        if d12_1 <= 0.0 {
            // a1 <= 0, so we clamp it to 0
            self.vertices[1].a = 1.0;
            self.count = 1;
            self.vertices[0] = self.vertices[1];
            return;
        }

        // Must be in e12 region.
        let inv_d12 = 1.0 / (d12_1 + d12_2);
        self.vertices[0].a = d12_1 * inv_d12;
        self.vertices[1].a = d12_2 * inv_d12;
        self.count = 2;
    }

    // Possible regions:
    // - points[2]
    // - edge points[0]-points[2]
    // - edge points[1]-points[2]
    // - inside the triangle
    fn solve3(&mut self) {
        let w1 = self.vertices[0].w;
        let w2 = self.vertices[1].w;
        let w3 = self.vertices[2].w;

        // Edge12
        let e12 = w2 - w1;
        let d12_1 = w2.dot(&e12);
        let d12_2 = -w1.dot(&e12);

        // Edge13
        let e13 = w3 - w1;
        let d13_1 = w3.dot(&e13);
        let d13_2 = -w1.dot(&e13);

        // Edge23
        let e23 = w3 - w2;
        let d23_1 = w3.dot(&e23);
        let d23_2 = -w2.dot(&e23);

        // Triangle123
        let n123 = e12.perp(&e13);
        let d123_1 = n123 * w2.perp(&w3);
        let d123_2 = n123 * w3.perp(&w1);
        let d123_3 = n123 * w1.perp(&w2);

        // w1 region
        if d12_2 <= 0.0 && d13_2 <= 0.0 {
            self.vertices[0].a = 1.0;
            self.count = 1;
            return;
        }

        // e12
        if d12_1 > 0.0 && d12_2 > 0.0 && d123_3 <= 0.0 {
            let inv_d12 = 1.0 / (d12_1 + d12_2);
            self.vertices[0].a = d12_1 * inv_d12;
            self.vertices[1].a = d12_2 * inv_d12;
            self.count = 2;
            return;
        }

        // e13
        if d13_1 > 0.0 && d13_2 > 0.0 && d123_2 <= 0.0 {
            let inv_d13 = 1.0 / (d13_1 + d13_2);
            self.vertices[0].a = d13_1 * inv_d13;
            self.vertices[2].a = d13_2 * inv_d13;
            self.count = 2;
            self.vertices[1] = self.vertices[2];
            return;
        }

        // w2 region
        if d12_1 <= 0.0 && d23_2 <= 0.0 {
            self.vertices[1].a = 1.0;
            self.count = 1;
            self.vertices[0] = self.vertices[1];
            return;
        }

        // w3 region
        if d13_1 <= 0.0 && d23_1 <= 0.0 {
            self.vertices[2].a = 1.0;
            self.count = 1;
            self.vertices[0] = self.vertices[2];
            return;
        }

        // e23
        if d23_1 > 0.0 && d23_2 > 0.0 && d123_1 <= 0.0 {
            let inv_d23 = 1.0 / (d23_1 + d23_2);
            self.vertices[1].a = d23_1 * inv_d23;
            self.vertices[2].a = d23_2 * inv_d23;
            self.count = 2;
            self.vertices[0] = self.vertices[2];
            return;
        }

        // Must be in triangle123
        let inv_d123 = 1.0 / (d123_1 + d123_2 + d123_3);
        self.vertices[0].a = d123_1 * inv_d123;
        self.vertices[1].a = d123_2 * inv_d123;
        self.vertices[2].a = d123_3 * inv_d123;
        self.count = 3;
    }
}
