// src/noyau/commande.rs
//
// Vocabulaire fermé des touches
// -----------------------------
// Une touche = un identifiant texte (étiquette du bouton).
// Identifiant inconnu / vide => None : ignoré explicitement par le moteur.

use std::f64::consts::{E, PI};

use super::operateurs::{OpBinaire, OpUnaire};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Commande {
    Chiffre(char),
    Point,
    Binaire(OpBinaire),
    Egal,
    EffacerTout,
    EffacerEntree,
    Retour,
    Unaire(OpUnaire),
    Constante(f64),
}

/// Table identifiant -> commande (hors chiffres).
const TABLE: &[(&str, Commande)] = &[
    (".", Commande::Point),
    ("+", Commande::Binaire(OpBinaire::Addition)),
    ("-", Commande::Binaire(OpBinaire::Soustraction)),
    ("*", Commande::Binaire(OpBinaire::Multiplication)),
    ("/", Commande::Binaire(OpBinaire::Division)),
    ("x^y", Commande::Binaire(OpBinaire::Puissance)),
    ("=", Commande::Egal),
    ("C", Commande::EffacerTout),
    ("CE", Commande::EffacerEntree),
    ("<-", Commande::Retour),
    ("+/-", Commande::Unaire(OpUnaire::Oppose)),
    ("sqrt", Commande::Unaire(OpUnaire::Racine)),
    ("x^2", Commande::Unaire(OpUnaire::Carre)),
    ("1/x", Commande::Unaire(OpUnaire::Inverse)),
    ("%", Commande::Unaire(OpUnaire::Pourcent)),
    ("sin", Commande::Unaire(OpUnaire::Sin)),
    ("cos", Commande::Unaire(OpUnaire::Cos)),
    ("tan", Commande::Unaire(OpUnaire::Tan)),
    ("log", Commande::Unaire(OpUnaire::Log10)),
    ("ln", Commande::Unaire(OpUnaire::Ln)),
    ("π", Commande::Constante(PI)),
    ("e", Commande::Constante(E)),
];

impl Commande {
    /// Identifiant -> commande. Sensible à la casse ("C" ≠ "c").
    pub fn depuis_identifiant(id: &str) -> Option<Commande> {
        let mut chars = id.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Some(Commande::Chiffre(c));
            }
        }

        TABLE
            .iter()
            .find(|(nom, _)| *nom == id)
            .map(|(_, cmd)| *cmd)
    }
}
