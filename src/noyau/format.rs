// src/noyau/format.rs
//
// Texte <-> nombre pour l’afficheur
// ---------------------------------
// - format_nombre : virgule fixe 12 décimales, zéros finaux retirés (pas de notation scientifique)
// - lire_nombre   : littéral décimal strict  -?chiffres(.chiffres)?

use super::erreur::ErreurCalcul;

/// Texte affiché quand le moteur est verrouillé en erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Nombre de décimales avant élagage.
const DECIMALES: usize = 12;

/* ------------------------ Affichage ------------------------ */

/// Forme canonique d’un résultat : "2", "2.5", "-0.333333333333", "Error".
///
/// Arrondi au demi supérieur (en valeur absolue) sur l’écriture décimale la plus
/// courte du f64, pas sur sa valeur binaire exacte : 1/8192 => "0.000122070313".
/// Les grandes magnitudes donnent de longues suites de chiffres : limite assumée.
pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        return TEXTE_ERREUR.to_string();
    }

    let mut s = virgule_fixe(x);

    // DECIMALES > 0 : il y a toujours un point ici
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// x (fini) en virgule fixe, exactement DECIMALES décimales.
fn virgule_fixe(x: f64) -> String {
    // écriture la plus courte : "1.220703125e-4", "1e20", "0e0"
    let sci = format!("{:e}", x.abs());
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i64 = exposant.parse().unwrap_or(0);

    let chiffres: Vec<u8> = mantisse
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // valeur = 0.c1c2c3… × 10^(exposant+1) ; k = chiffres gardés dans x·10^DECIMALES
    let k = exposant + 1 + DECIMALES as i64;
    let chiffre = |i: i64| -> u8 {
        usize::try_from(i)
            .ok()
            .and_then(|i| chiffres.get(i).copied())
            .unwrap_or(0)
    };

    let mut garde: Vec<u8> = (0..k.max(0)).map(chiffre).collect();

    // demi supérieur : seul le premier chiffre abandonné compte
    if k >= 0 && chiffre(k) >= 5 {
        let mut retenue = true;
        for c in garde.iter_mut().rev() {
            if *c == 9 {
                *c = 0;
            } else {
                *c += 1;
                retenue = false;
                break;
            }
        }
        if retenue {
            garde.insert(0, 1);
        }
    }

    // au moins un chiffre entier
    while garde.len() <= DECIMALES {
        garde.insert(0, 0);
    }

    let (entier, frac) = garde.split_at(garde.len() - DECIMALES);
    let texte = |t: &[u8]| t.iter().map(|c| char::from(b'0' + c)).collect::<String>();

    let signe = if x.is_sign_negative() { "-" } else { "" };
    format!("{signe}{}.{}", texte(entier), texte(frac))
}

/* ------------------------ Lecture ------------------------ */

/// Vérifie la forme -?[0-9]*(\.[0-9]*)? avec au moins un chiffre.
fn est_litteral_decimal(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);

    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    let chiffres = |t: &str| t.bytes().all(|b| b.is_ascii_digit());

    !(entier.is_empty() && frac.is_empty()) && chiffres(entier) && chiffres(frac)
}

/// Lit la saisie courante. "5." et ".5" sont acceptés ; "-", "1e5", "inf", "Error" refusés.
pub fn lire_nombre(s: &str) -> Result<f64, ErreurCalcul> {
    if !est_litteral_decimal(s) {
        return Err(ErreurCalcul::SaisieInvalide(s.to_string()));
    }
    s.parse::<f64>()
        .map_err(|_| ErreurCalcul::SaisieInvalide(s.to_string()))
}
