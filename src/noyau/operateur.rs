// src/noyau/operateur.rs
//
// Les quatre opérations (IEEE double).
//
// Règle maison : division par zéro => résultat = diviseur (donc 0).
// Pas d’erreur, pas d’infini affiché.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Symbole affiché (touche + ligne d’attente).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }

    /// a (op) b.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => {
                if b == 0.0 {
                    b
                } else {
                    a / b
                }
            }
        }
    }
}
