//! Tests scénarios : suites de touches telles qu’un utilisateur les tape.
//!
//! Chaque scénario part d’un moteur neuf (ou de "C") et vérifie l’afficheur
//! à la fin, parfois à chaque étape.

use super::Moteur;

/// Tape une suite de touches (identifiants séparés par des espaces) et rend l’affichage final.
fn taper(m: &mut Moteur, touches: &str) -> String {
    for id in touches.split_whitespace() {
        m.traiter(id)
            .unwrap_or_else(|e| panic!("touche={id:?} faute={e}"));
    }
    m.affichage().to_string()
}

fn depuis_zero(touches: &str) -> String {
    let mut m = Moteur::new();
    taper(&mut m, touches)
}

fn assert_affiche(touches: &str, attendu: &str) {
    assert_eq!(depuis_zero(touches), attendu, "touches={touches:?}");
}

/* ------------------------ Enchaînement sans priorité ------------------------ */

#[test]
fn scen_enchainement_gauche_droite() {
    // (2+3)*4, pas 2+3*4
    assert_affiche("C 2 + 3 * 4 =", "20");
}

#[test]
fn scen_resultat_intermediaire_affiche() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "2 + 3"), "3");
    assert_eq!(taper(&mut m, "*"), "5");
    assert_eq!(taper(&mut m, "4"), "4");
    assert_eq!(taper(&mut m, "="), "20");
}

#[test]
fn scen_remplacement_operateur() {
    // + remplacé par * avant tout nouvel opérande : 7*3
    assert_affiche("C 7 + * 3 =", "21");
}

#[test]
fn scen_egal_sans_operateur() {
    assert_affiche("4 2 =", "42");
    assert_affiche("4 2 = =", "42");
}

#[test]
fn scen_egal_repete_sans_effet() {
    // après =, plus rien en suspens
    assert_affiche("2 + 3 = =", "5");
}

#[test]
fn scen_resultat_reutilise() {
    assert_affiche("2 + 3 = * 4 =", "20");
}

#[test]
fn scen_chiffre_apres_resultat_repart_de_zero() {
    assert_affiche("2 + 3 = 7", "7");
    assert_affiche("2 + 3 = .", "0.");
}

#[test]
fn scen_operateur_sans_second_operande() {
    // 6 * = : l’opérande droit est la valeur affichée
    assert_affiche("6 * =", "36");
}

#[test]
fn scen_puissance() {
    assert_affiche("2 x^y 1 0 =", "1024");
    assert_affiche("9 x^y . 5 =", "3");
}

#[test]
fn scen_soustraction_negative() {
    assert_affiche("3 - 8 =", "-5");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn scen_point_idempotent() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "3 ."), "3.");
    assert_eq!(taper(&mut m, "."), "3.");
    assert_eq!(taper(&mut m, "1 ."), "3.1");
}

#[test]
fn scen_point_sur_zero() {
    assert_affiche(". 5", "0.5");
}

#[test]
fn scen_retour() {
    assert_affiche("1 2 3 <-", "12");
    assert_affiche("7 <-", "0");
    assert_affiche("<- <-", "0");
    assert_affiche("1 . <-", "1");
    assert_affiche("0 . 5 <- <-", "0");
}

#[test]
fn scen_retour_apres_resultat_sans_effet() {
    assert_affiche("1 2 + 3 0 = <-", "42");
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn scen_unaire_domaine() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "C 4 <- 9 +/-"), "-9");
    assert_eq!(taper(&mut m, "sqrt"), "Error");
    assert!(m.en_erreur());
}

#[test]
fn scen_unaires_valeurs() {
    assert_affiche("9 sqrt", "3");
    assert_affiche("1 2 x^2", "144");
    assert_affiche("4 1/x", "0.25");
    assert_affiche("5 0 %", "0.5");
    assert_affiche("1 0 0 0 log", "3");
    assert_affiche("e ln", "1");
    assert_affiche("3 0 sin", "0.5");
    assert_affiche("6 0 cos", "0.5");
    assert_affiche("4 5 tan", "1");
    assert_affiche("1 8 0 sin", "0");
}

#[test]
fn scen_unaire_garde_l_attente() {
    // 2 + √9 = 5
    assert_affiche("2 + 9 sqrt =", "5");
}

#[test]
fn scen_unaire_puis_operateur_remplace() {
    // après un unaire, l’entrée est figée : l’opérateur suivant remplace + sans enchaîner
    assert_affiche("2 + 9 sqrt * 4 =", "8");
}

#[test]
fn scen_arrondi_au_demi_superieur() {
    // 1/8192 = 0.0001220703125 : la 13e décimale est un 5 exact
    assert_affiche("8 1 9 2 1/x", "0.000122070313");
    assert_affiche("8 1 9 2 +/- 1/x", "-0.000122070313");
}

#[test]
fn scen_erreurs_unaires() {
    assert_affiche("0 1/x", "Error");
    assert_affiche("0 log", "Error");
    assert_affiche("5 +/- ln", "Error");
}

#[test]
fn scen_oppose_double() {
    assert_affiche("7 +/- +/-", "7");
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn scen_constantes() {
    assert_affiche("π", "3.14159265359");
    assert_affiche("e", "2.718281828459");
    assert_affiche("2 * π =", "6.28318530718");
}

#[test]
fn scen_chiffre_apres_constante() {
    assert_affiche("π 4", "4");
}

/* ------------------------ Erreur verrouillée ------------------------ */

#[test]
fn scen_division_par_zero_verrouille() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "C 5 / 0 ="), "Error");

    // tout est ignoré, sauf CE / C / constante
    assert_eq!(taper(&mut m, "7 . <- + = sqrt +/-"), "Error");
    assert!(m.en_erreur());

    assert_eq!(taper(&mut m, "CE"), "0");
    assert!(!m.en_erreur());
    assert_eq!(taper(&mut m, "8 + 1 ="), "9");
}

#[test]
fn scen_erreur_puis_c() {
    assert_affiche("5 / 0 = C", "0");
    assert_affiche("5 / 0 = C 3 + 4 =", "7");
}

#[test]
fn scen_erreur_puis_ce_sans_chaine() {
    // CE après erreur : l’accumulateur a été vidé, = n’a rien à faire
    assert_affiche("5 / 0 = CE 3 =", "3");
}

#[test]
fn scen_erreur_puis_constante() {
    let mut m = Moteur::new();
    taper(&mut m, "5 / 0 =");
    assert_eq!(taper(&mut m, "π"), "3.14159265359");
    assert!(!m.en_erreur());
}

#[test]
fn scen_erreur_en_chaine() {
    // l’erreur survient au moment de l’enchaînement
    assert_affiche("5 / 0 +", "Error");
    assert_affiche("5 / 0 + 2 =", "Error");
}

#[test]
fn scen_puissance_non_finie() {
    assert_affiche("8 +/- x^y . 5 =", "Error");
}

#[test]
fn scen_depassement() {
    // 10^300 * 10^300 => infini
    assert_affiche("1 0 x^y 3 0 0 = * =", "Error");
}

/* ------------------------ Touches inconnues ------------------------ */

#[test]
fn scen_touches_inconnues_ignorees() {
    let mut m = Moteur::new();
    taper(&mut m, "1 2 +");
    let avant = m.clone();

    for id in ["", "MC", "MR", "M+", "pi", "exp", "12", "c", "ce"] {
        assert_eq!(m.traiter(id).unwrap(), "12");
    }
    assert_eq!(m.affichage(), avant.affichage());
    assert_eq!(m.operateur_en_attente(), avant.operateur_en_attente());

    assert_eq!(taper(&mut m, "3 ="), "15");
}
