// src/noyau/operateurs.rs
//
// Opérateurs binaires / unaires (f64)
// -----------------------------------
// - Trig en DEGRÉS (convention calculatrice de bureau)
// - Tout résultat NaN / infini => ErreurCalcul (le moteur verrouille)

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Racine,
    Carre,
    Inverse,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Oppose,
    Pourcent,
}

/* ------------------------ Garde-fou commun ------------------------ */

fn fini(r: f64) -> Result<f64, ErreurCalcul> {
    if r.is_finite() {
        Ok(r)
    } else {
        Err(ErreurCalcul::ResultatNonFini)
    }
}

/* ------------------------ Binaires ------------------------ */

impl OpBinaire {
    /// a (op) b ; ÷0 refusé avant calcul, le reste via le garde-fou “fini”.
    pub fn calculer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        let r = match self {
            OpBinaire::Addition => a + b,
            OpBinaire::Soustraction => a - b,
            OpBinaire::Multiplication => a * b,
            OpBinaire::Division => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
            // (-8)^(1/3) => NaN => erreur
            OpBinaire::Puissance => a.powf(b),
        };
        fini(r)
    }
}

/* ------------------------ Unaires ------------------------ */

impl OpUnaire {
    pub fn calculer(self, x: f64) -> Result<f64, ErreurCalcul> {
        let hors_domaine = Err(ErreurCalcul::HorsDomaine(self));

        let r = match self {
            OpUnaire::Racine => {
                if x < 0.0 {
                    return hors_domaine;
                }
                x.sqrt()
            }
            OpUnaire::Carre => x * x,
            OpUnaire::Inverse => {
                if x == 0.0 {
                    return hors_domaine;
                }
                1.0 / x
            }
            OpUnaire::Sin => x.to_radians().sin(),
            OpUnaire::Cos => x.to_radians().cos(),
            OpUnaire::Tan => x.to_radians().tan(),
            OpUnaire::Log10 => {
                if x <= 0.0 {
                    return hors_domaine;
                }
                x.log10()
            }
            OpUnaire::Ln => {
                if x <= 0.0 {
                    return hors_domaine;
                }
                x.ln()
            }
            OpUnaire::Oppose => -x,
            OpUnaire::Pourcent => x / 100.0,
        };
        fini(r)
    }
}
