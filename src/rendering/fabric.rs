use super::{Size, Yarn};

/// A rectangle of styled text, stored as one yarn per row.
///
/// Every row yarn has a length equal to the number of columns.
#[derive(PartialEq, Eq, Debug)]
pub struct Fabric {
    size: Size,
    rows: Vec<Yarn>,
}

impl Fabric {
    /// Return a blank fabric of the given size.
    pub fn new(size: Size) -> Self {
        let mut blank = Yarn::new();
        blank.resize(size.columns);
        let rows = vec![blank; size.rows];
        Fabric { size, rows }
    }

    /// Return a fabric of the given size with the string centered in it.
    pub fn center(string: &str, size: Size) -> Self {
        let mut fabric = Fabric::new(size);
        if size.rows == 0 {
            return fabric;
        }
        let row = size.rows / 2;
        fabric.rows[row] = Yarn::center(string, size.columns);
        fabric
    }

    pub fn size(&self) -> &Size {
        &self.size
    }

    pub fn rows(&self) -> &[Yarn] {
        &self.rows
    }

    /// Attach the other fabric below this one and return the new fabric.
    pub fn quilt_bottom(mut self, other: Fabric) -> Fabric {
        for mut row in other.rows {
            row.resize(self.size.columns);
            self.rows.push(row);
        }
        self.size.rows += other.size.rows;
        self
    }

    /// Add blank rows at the bottom until the fabric has `new_rows` rows.
    pub fn pad_bottom(&mut self, new_rows: usize) {
        while self.size.rows < new_rows {
            let mut blank = Yarn::new();
            blank.resize(self.size.columns);
            self.rows.push(blank);
            self.size.rows += 1;
        }
    }
}

impl From<Vec<Yarn>> for Fabric {
    fn from(rows: Vec<Yarn>) -> Self {
        let columns: usize = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut rows = rows;
        for row in rows.iter_mut() {
            row.resize(columns);
        }
        let size: Size = Size::new(rows.len(), columns);
        Fabric { size, rows }
    }
}

impl From<Yarn> for Fabric {
    fn from(row: Yarn) -> Self {
        let size: Size = Size::new(1, row.len());
        Fabric {
            size,
            rows: vec![row],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(
        Fabric::new(Size::new(2, 3)),
        Fabric::new(Size::new(1, 3)),
        Fabric::new(Size::new(3, 3))
    )]
    fn test_quilt_bottom(fabric: Fabric, other: Fabric, expected: Fabric) {
        let result = fabric.quilt_bottom(other);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_pad_bottom() {
        let mut fabric = Fabric::new(Size::new(1, 2));
        fabric.pad_bottom(3);

        assert_eq!(fabric, Fabric::new(Size::new(3, 2)));
    }
}
