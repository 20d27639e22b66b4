use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{Cell, ExtractError};

/// One worksheet as a grid addressed from cell A1.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// Loads every sheet of the workbook (xlsx, xlsm, xls or ods) in tab order.
pub fn read_workbook(path: &Path) -> Result<Vec<Sheet>, ExtractError> {
    let mut workbook = open_workbook_auto(path)?;
    let mut sheets = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        sheets.push(Sheet {
            rows: grid_from_range(&range),
            name,
        });
    }

    Ok(sheets)
}

/// calamine ranges start at the first used cell; pad them back so that column 0 is column A.
fn grid_from_range(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let start_col = start_col as usize;
    let width = start_col + range.width();

    let mut rows: Vec<Vec<Cell>> = (0..start_row).map(|_| vec![Cell::Empty; width]).collect();
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col];
        cells.extend(row.iter().map(Cell::from));
        rows.push(cells);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_ranges_that_do_not_start_at_a1() {
        let mut range = Range::new((1, 2), (2, 3));
        range.set_value((1, 2), Data::String("Cada 250H".to_string()));
        range.set_value((2, 2), Data::String("A.01".to_string()));
        range.set_value((2, 3), Data::Float(3.0));

        let grid = grid_from_range(&range);

        assert_eq!(grid.len(), 3);
        assert!(grid[0].iter().all(Cell::is_empty));
        assert_eq!(grid[1][2], Cell::Text("Cada 250H".to_string()));
        assert_eq!(grid[2][..2], [Cell::Empty, Cell::Empty]);
        assert_eq!(grid[2][3], Cell::Number(3.0));
    }

    #[test]
    fn empty_range_has_no_rows() {
        let range: Range<Data> = Range::empty();
        assert!(grid_from_range(&range).is_empty());
    }
}
