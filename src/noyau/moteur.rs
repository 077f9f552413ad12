//! Moteur de la calculatrice de bureau.
//!
//! Machine à états explicite (au lieu de trois drapeaux indépendants) :
//! - `Edition(attente)` : les chiffres s’ajoutent à la saisie courante
//! - `Figee(attente)`   : valeur affichée figée (après opérateur, =, unaire, constante) ;
//!   le prochain chiffre démarre un nombre neuf
//! - `Erreur`           : erreur verrouillée ; seuls CE / C / constante en sortent
//!   (chiffres et point y sont ignorés volontairement : l’erreur ne se lève pas en tapant)
//!
//! `attente` = opérateur binaire en suspens + opérande gauche (l’accumulateur).
//! En `Erreur`, il n’y a ni accumulateur ni opérateur : combinaison illégale impossible.
//!
//! Enchaînement immédiat gauche -> droite, sans priorité : `2 + 3 * 4 =` donne 20.
//!
//! Contrats :
//! - Aucune opération ne panique ; les erreurs de calcul verrouillent l’état.
//! - Seule faute remontée : chiffre invalide (précondition de l’appelant).
//! - Mono-thread, synchrone : l’appelant sérialise les accès.

use tracing::{debug, trace};

use super::commande::Commande;
use super::erreur::{ErreurCalcul, Faute};
use super::format::{format_nombre, lire_nombre, TEXTE_ERREUR};
use super::operateurs::{OpBinaire, OpUnaire};

/// Opération binaire en suspens.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Attente {
    op: OpBinaire,
    gauche: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Edition(Option<Attente>),
    Figee(Option<Attente>),
    Erreur,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    // toujours un littéral décimal valide, ou TEXTE_ERREUR en mode Erreur
    saisie: String,
    mode: Mode,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: "0".to_string(),
            mode: Mode::Edition(None),
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte de l’afficheur (lecture pure).
    pub fn affichage(&self) -> &str {
        &self.saisie
    }

    pub fn en_erreur(&self) -> bool {
        self.mode == Mode::Erreur
    }

    #[cfg(test)]
    pub(crate) fn operateur_en_attente(&self) -> Option<OpBinaire> {
        self.attente().map(|a| a.op)
    }

    fn attente(&self) -> Option<Attente> {
        match self.mode {
            Mode::Edition(a) | Mode::Figee(a) => a,
            Mode::Erreur => None,
        }
    }

    /* ------------------------ Point d’entrée (source de commandes) ------------------------ */

    /// Applique une touche identifiée par son étiquette et rend l’affichage.
    /// Identifiant inconnu / vide : aucun changement d’état.
    pub fn traiter(&mut self, id: &str) -> Result<&str, Faute> {
        match Commande::depuis_identifiant(id) {
            Some(cmd) => self.appliquer(cmd)?,
            None => trace!(id, "touche inconnue ignorée"),
        }
        Ok(self.affichage())
    }

    pub fn appliquer(&mut self, cmd: Commande) -> Result<(), Faute> {
        debug!(?cmd, "commande");

        match cmd {
            Commande::Chiffre(c) => self.ajouter_chiffre(c)?,
            Commande::Point => self.ajouter_point(),
            Commande::Binaire(op) => self.appliquer_binaire(op),
            Commande::Egal => self.evaluer(),
            Commande::EffacerTout => self.effacer_tout(),
            Commande::EffacerEntree => self.effacer_entree(),
            Commande::Retour => self.retour(),
            Commande::Unaire(op) => self.appliquer_unaire(op),
            Commande::Constante(v) => self.inserer_constante(v),
        }
        Ok(())
    }

    /* ------------------------ Saisie ------------------------ */

    /// Prépare la saisie pour un chiffre / un point.
    /// Rend false si la touche doit être ignorée (erreur verrouillée).
    fn entrer_en_edition(&mut self) -> bool {
        match self.mode {
            Mode::Erreur => false,
            Mode::Figee(a) => {
                self.saisie = "0".to_string();
                self.mode = Mode::Edition(a);
                true
            }
            Mode::Edition(_) => true,
        }
    }

    pub fn ajouter_chiffre(&mut self, c: char) -> Result<(), Faute> {
        if !c.is_ascii_digit() {
            return Err(Faute::ArgumentInvalide {
                attendu: "chiffre 0-9",
                recu: c,
            });
        }
        if !self.entrer_en_edition() {
            return Ok(());
        }

        if self.saisie == "0" {
            self.saisie.clear();
        }
        self.saisie.push(c);
        Ok(())
    }

    /// Idempotent : un seul point par nombre.
    pub fn ajouter_point(&mut self) {
        if !self.entrer_en_edition() {
            return;
        }
        if !self.saisie.contains('.') {
            self.saisie.push('.');
        }
    }

    /// Sans effet hors édition (résultat figé ou erreur).
    pub fn retour(&mut self) {
        if !matches!(self.mode, Mode::Edition(_)) {
            return;
        }
        self.saisie.pop();
        if self.saisie.is_empty() {
            self.saisie.push('0');
        }
    }

    /* ------------------------ Effacements ------------------------ */

    /// CE : efface l’entrée, garde l’opération en suspens (sauf en erreur : déjà vidée).
    pub fn effacer_entree(&mut self) {
        self.saisie = "0".to_string();
        if self.mode == Mode::Erreur {
            self.mode = Mode::Figee(None);
        }
    }

    /// C : retour à l’état initial.
    pub fn effacer_tout(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Calculs ------------------------ */

    pub fn appliquer_binaire(&mut self, op: OpBinaire) {
        let edition = match self.mode {
            Mode::Erreur => return,
            Mode::Edition(_) => true,
            Mode::Figee(_) => false,
        };

        let Some(x) = self.lire_saisie() else { return };

        let gauche = match self.attente() {
            None => x,
            // nouvel opérande tapé depuis l’opérateur précédent : on enchaîne
            Some(a) if edition => {
                let Some(r) = self.calculer(a.op.calculer(a.gauche, x)) else {
                    return;
                };
                self.saisie = format_nombre(r);
                r
            }
            // opérateur pressé deux fois : simple remplacement
            Some(a) => a.gauche,
        };

        self.mode = Mode::Figee(Some(Attente { op, gauche }));
    }

    /// = : sans effet si rien n’est en suspens.
    pub fn evaluer(&mut self) {
        let Some(a) = self.attente() else { return };
        let Some(x) = self.lire_saisie() else { return };
        let Some(r) = self.calculer(a.op.calculer(a.gauche, x)) else {
            return;
        };

        self.saisie = format_nombre(r);
        self.mode = Mode::Figee(None);
    }

    /// Agit sur la valeur affichée seulement ; l’opération en suspens est conservée.
    pub fn appliquer_unaire(&mut self, op: OpUnaire) {
        if self.mode == Mode::Erreur {
            return;
        }
        let Some(x) = self.lire_saisie() else { return };
        let Some(r) = self.calculer(op.calculer(x)) else {
            return;
        };

        self.saisie = format_nombre(r);
        self.mode = Mode::Figee(self.attente());
    }

    /// π, e : remplace l’affichage ; sort aussi de l’erreur.
    pub fn inserer_constante(&mut self, v: f64) {
        if !v.is_finite() {
            self.verrouiller(ErreurCalcul::ResultatNonFini);
            return;
        }
        self.saisie = format_nombre(v);
        self.mode = Mode::Figee(self.attente());
    }

    /* ------------------------ Erreur verrouillée ------------------------ */

    fn lire_saisie(&mut self) -> Option<f64> {
        let lu = lire_nombre(&self.saisie);
        self.calculer(lu)
    }

    /// Ok => valeur ; Err => verrouillage + None.
    fn calculer(&mut self, r: Result<f64, ErreurCalcul>) -> Option<f64> {
        match r {
            Ok(v) => Some(v),
            Err(e) => {
                self.verrouiller(e);
                None
            }
        }
    }

    fn verrouiller(&mut self, cause: ErreurCalcul) {
        debug!(%cause, "erreur verrouillée");
        self.saisie = TEXTE_ERREUR.to_string();
        self.mode = Mode::Erreur;
    }
}
