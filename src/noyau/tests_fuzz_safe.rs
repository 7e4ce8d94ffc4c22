//! Tests fuzz safe : séquences de touches aléatoires, déterministes et bornées.
//!
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::format::lire_nombre;
use super::moteur::{Moteur, ENTREE_DEFAUT};
use super::touche::{Touche, PAVE};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

fn toutes_les_touches() -> Vec<Touche> {
    PAVE.iter().flatten().copied().collect()
}

fn entree_lisible(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

fn check_invariants(m: &Moteur, trace: &[Touche]) {
    let e = m.entree();
    assert!(!e.is_empty(), "entrée vide après {trace:?}");
    assert!(entree_lisible(e), "entrée illisible {e:?} après {trace:?}");

    if let Some(accumulateur) = m.accumulateur() {
        assert!(
            entree_lisible(accumulateur),
            "accumulateur illisible {accumulateur:?} après {trace:?}"
        );
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_sequences_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let touches = toutes_les_touches();
    let mut rng = Rng::new(0xC0FF_EE12_3456_789A);

    for _ in 0..2_000 {
        budget(start, max);

        let mut m = Moteur::default();
        let mut trace = Vec::new();
        let n = 1 + rng.pick(40);

        for _ in 0..n {
            let t = touches[rng.pick(touches.len() as u32) as usize];
            trace.push(t);
            m.appuyer(t);
            check_invariants(&m, &trace);
        }

        m.appuyer(Touche::Effacer);
        assert_eq!(m.entree(), ENTREE_DEFAUT, "C après {trace:?}");
        assert!(m.accumulateur().is_none(), "C après {trace:?}");
        assert!(m.operateur().is_none(), "C après {trace:?}");
        assert!(!m.nouvelle_saisie(), "C après {trace:?}");
    }
}

#[test]
fn fuzz_determinisme() {
    let touches = toutes_les_touches();

    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = Moteur::default();
        for _ in 0..200 {
            m.appuyer(touches[rng.pick(touches.len() as u32) as usize]);
        }
        (m.entree().to_string(), m.resume_attente())
    };

    for seed in [1_u64, 42, 2024, 0xDEAD_BEEF] {
        assert_eq!(jouer(seed), jouer(seed), "seed={seed}");
    }
}

#[test]
fn fuzz_chiffres_seuls_concatenent() {
    let mut rng = Rng::new(7);

    for _ in 0..500 {
        let mut m = Moteur::default();
        let mut attendu = String::new();
        let n = 1 + rng.pick(12);

        for _ in 0..n {
            let d = rng.pick(10) as u8;
            m.appuyer(Touche::Chiffre(d));
            if attendu.is_empty() || attendu == "0" {
                attendu = d.to_string();
            } else {
                attendu.push_str(&d.to_string());
            }
        }

        assert_eq!(m.entree(), attendu);
        assert_eq!(lire_nombre(m.entree()), attendu.parse::<f64>().unwrap_or(0.0));
    }
}
