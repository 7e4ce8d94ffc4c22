//! Noyau de la calculatrice (sans vue)
//!
//! Organisation interne :
//! - operateur.rs : les quatre opérations (+ règle division par zéro)
//! - format.rs    : nombre <-> texte de l’écran
//! - touche.rs    : touches du pavé + équivalents clavier
//! - moteur.rs    : machine à états (entrée, attente, nouvelle saisie)

pub mod format;
pub mod moteur;
pub mod operateur;
pub mod touche;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::Moteur;
pub use touche::Touche;
