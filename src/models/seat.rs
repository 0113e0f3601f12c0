use serde::{Deserialize, Serialize};

use crate::utils::constants::GRID_COLS;

/// Asiento tal como lo entrega el backend.
/// El estado `is_reserved` puede quedar obsoleto entre el listado y la
/// reserva: la verificación autoritativa es siempre la respuesta del backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Seat {
    pub id: i64,
    pub seat_number: u8,
    pub is_reserved: bool,
    pub row: u8,
    pub column: u8,
}

/// Fila de un asiento en la sala fija de 3x3: ceil(n / 3)
pub fn seat_row(seat_number: u8) -> u8 {
    (seat_number + GRID_COLS - 1) / GRID_COLS
}

/// Columna de un asiento en la sala fija de 3x3: ((n - 1) mod 3) + 1
pub fn seat_col(seat_number: u8) -> u8 {
    (seat_number - 1) % GRID_COLS + 1
}

/// Etiqueta de ubicación mostrada al usuario ("2행 3열")
pub fn seat_location_label(seat_number: u8) -> String {
    format!("{}행 {}열", seat_row(seat_number), seat_col(seat_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::TOTAL_SEATS;

    #[test]
    fn test_seat_row_col_corners() {
        assert_eq!((seat_row(1), seat_col(1)), (1, 1));
        assert_eq!((seat_row(5), seat_col(5)), (2, 2));
        assert_eq!((seat_row(9), seat_col(9)), (3, 3));
    }

    #[test]
    fn test_seat_row_col_invert() {
        // La numeración por filas debe reconstruirse desde (fila, columna)
        for n in 1..=TOTAL_SEATS {
            let row = seat_row(n);
            let col = seat_col(n);
            assert_eq!((row - 1) * GRID_COLS + col, n);
            assert!((1..=3).contains(&row));
            assert!((1..=3).contains(&col));
        }
    }

    #[test]
    fn test_seat_location_label() {
        assert_eq!(seat_location_label(4), "2행 1열");
        assert_eq!(seat_location_label(9), "3행 3열");
    }
}
