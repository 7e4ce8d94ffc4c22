// src/noyau/touche.rs
//
// Touches du pavé (et leur équivalent clavier physique).
//
// Une touche = exactement un événement pour le moteur.

use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    /// C
    Effacer,
    /// DEL
    Supprimer,
    Pourcent,
    /// ±
    Signe,
}

/// Disposition du pavé (4 colonnes), de haut en bas.
pub const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Effacer,
        Touche::Signe,
        Touche::Pourcent,
        Touche::Operateur(Operateur::Division),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Multiplication),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Soustraction),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Addition),
    ],
    [
        Touche::Supprimer,
        Touche::Chiffre(0),
        Touche::Virgule,
        Touche::Egal,
    ],
];

impl Touche {
    /// Texte du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Virgule => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::Supprimer => "DEL".to_string(),
            Touche::Pourcent => "%".to_string(),
            Touche::Signe => "±".to_string(),
        }
    }

    /// Info-bulle (souris).
    pub fn aide(self) -> &'static str {
        match self {
            Touche::Chiffre(_) | Touche::Virgule => "Saisie",
            Touche::Operateur(_) => "Opération (enchaîne le calcul en attente)",
            Touche::Egal => "Résultat (Entrée)",
            Touche::Effacer => "Remise à zéro totale (Échap)",
            Touche::Supprimer => "Efface le dernier chiffre (Retour arrière)",
            Touche::Pourcent => "Divise l’entrée par 100",
            Touche::Signe => "Change le signe de l’entrée",
        }
    }

    /// Caractère tapé au clavier -> touche.
    ///
    /// ',' = '.' (clavier français) ; 'x' / '*' = ×.
    /// Retour arrière / Échap / Entrée ne sont pas des caractères : gérés dans app.rs.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        if let Some(d) = c.to_digit(10) {
            return Some(Touche::Chiffre(d as u8));
        }
        let t = match c {
            '.' | ',' => Touche::Virgule,
            '+' => Touche::Operateur(Operateur::Addition),
            '-' | '−' => Touche::Operateur(Operateur::Soustraction),
            '*' | 'x' | 'X' | '×' => Touche::Operateur(Operateur::Multiplication),
            '/' | '÷' => Touche::Operateur(Operateur::Division),
            '=' => Touche::Egal,
            '%' => Touche::Pourcent,
            _ => return None,
        };
        Some(t)
    }
}
