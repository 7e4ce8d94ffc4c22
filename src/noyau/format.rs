// src/noyau/format.rs
//
// Nombre <-> texte de l’écran.
//
// - Écriture : représentation décimale la plus courte qui relit la même valeur
//   (Display de f64), sans précision fixe ni locale.
// - Très grands / très petits : forme exposant (1e21, 1.5e-7).
// - Lecture : entrée partielle acceptée ("5.", "-0."), jamais d’erreur.

/* ------------------------ Seuils forme exposant ------------------------ */

const SEUIL_EXPOSANT_HAUT: f64 = 1e21;
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

/// f64 -> texte d’écran.
pub fn format_nombre(x: f64) -> String {
    // -0 s’affiche "0"
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return format!("{x}");
    }

    let a = x.abs();
    if !(SEUIL_EXPOSANT_BAS..SEUIL_EXPOSANT_HAUT).contains(&a) {
        format!("{x:e}")
    } else {
        format!("{x}")
    }
}

/// Texte d’écran -> f64.
///
/// Une entrée illisible vaut 0 (l’écran ne doit jamais bloquer un calcul).
pub fn lire_nombre(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}
