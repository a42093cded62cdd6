//! Element rules for One Click exports, one per OmniClass bucket.

use crate::classify::registry::Registry;
use crate::classify::rule::{and_or_where, and_where, Rule};
use crate::error::Result;
use crate::table::Table;
use crate::taxonomy::ElementCategory;

/// Runs without the usual null guard, so a CSI 12/25/31 row is re-bucketed
/// even when an earlier rule already categorized it.
pub struct CSIDivision(pub String);

impl Rule for CSIDivision {
    fn name(&self) -> &'static str {
        "CSIDivision"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(table, registry, t, &["oc_csi_twelve"], ElementCategory::Ffe.as_str())?;
        and_where(table, registry, t, &["oc_csi_twenty_five"], ElementCategory::Ffe.as_str())?;
        and_where(
            table,
            registry,
            t,
            &["oc_csi_thirty_one"],
            ElementCategory::Sitework.as_str(),
        )?;
        Ok(())
    }
}

pub struct OmniClassSubstructure(pub String);

impl Rule for OmniClassSubstructure {
    fn name(&self) -> &'static str {
        "OmniClassSubstructure"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_sub"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_sub", "oc_q_fdn"],
            ElementCategory::Substructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_sub", "oc_q_vert"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_sub", "oc_q_horz"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_sub", "oc_q_horz"],
            &["oc_csi_three", "oc_csi_five", "oc_csi_thirty_one"],
            ElementCategory::Substructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_sub", "oc_q_ext"],
            ElementCategory::Substructure.as_str(),
        )?;
        Ok(())
    }
}

pub struct OmniClassShellSuperstructure(pub String);

impl Rule for OmniClassShellSuperstructure {
    fn name(&self) -> &'static str {
        "OmniClassShellSuperstructure"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_vert"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_horz"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_horz"],
            &["oc_csi_seven", "oc_csi_eight"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_horz", "oc_csi_nine"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &[
                "oc_clf_omni_na",
                "oc_omni_shell_super",
                "oc_q_horz",
                "oc_csi_nine",
                "oc_n_glass_sheath",
            ],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_other"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_other", "oc_csi_nine"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_other"],
            &["oc_csi_seven", "oc_csi_eight"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_other"],
            &["oc_csi_three", "oc_csi_five", "oc_csi_six", "oc_csi_thirty_one"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_other"],
            &["oc_n_flooring", "oc_n_ceil_pan", "oc_n_acoustic"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_other"],
            &["oc_n_cladding", "oc_n_glass_sheath"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_super", "oc_q_fdn"],
            ElementCategory::Superstructure.as_str(),
        )?;
        Ok(())
    }
}

pub struct OmniClassShellEnclosure(pub String);

impl Rule for OmniClassShellEnclosure {
    fn name(&self) -> &'static str {
        "OmniClassShellEnclosure"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_vert"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_ext"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_horz"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_horz", "oc_csi_three"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &[
                "oc_clf_omni_na",
                "oc_omni_shell_enc",
                "oc_q_horz",
                "oc_csi_five",
                "oc_n_deck",
            ],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_fdn"],
            ElementCategory::Substructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_int"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_other"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_shell_enc", "oc_q_win_door"],
            ElementCategory::Enclosure.as_str(),
        )?;
        Ok(())
    }
}

pub struct OmniClassInteriorConstruction(pub String);

impl Rule for OmniClassInteriorConstruction {
    fn name(&self) -> &'static str {
        "OmniClassInteriorConstruction"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_int_con"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_int_con", "oc_csi_three"],
            ElementCategory::Unknown.as_str(),
        )?;
        Ok(())
    }
}

pub struct OmniClassInteriorFinishes(pub String);

impl Rule for OmniClassInteriorFinishes {
    fn name(&self) -> &'static str {
        "OmniClassInteriorFinishes"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["oc_clf_omni_na", "oc_omni_int_fin"],
            ElementCategory::InteriorFinishes.as_str(),
        )
    }
}

pub struct OmniClassMEP(pub String);

impl Rule for OmniClassMEP {
    fn name(&self) -> &'static str {
        "OmniClassMEP"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["oc_clf_omni_na", "oc_omni_mep"],
            ElementCategory::Mep.as_str(),
        )
    }
}

pub struct OmniClassNotDefined(pub String);

impl Rule for OmniClassNotDefined {
    fn name(&self) -> &'static str {
        "OmniClassNotDefined"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_eight"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_six"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_four"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_ten"],
            ElementCategory::Ffe.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_nine"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_seven"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_six"],
            &["oc_n_flooring", "oc_n_carpet"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_six", "oc_n_timber"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_six", "oc_n_flooring"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_six", "oc_n_timber"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_five"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_five", "oc_n_cladding"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_three"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_twelve"],
            ElementCategory::Ffe.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_twenty_two"],
            ElementCategory::Mep.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_twenty_three"],
            ElementCategory::Mep.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_twenty_five"],
            ElementCategory::Ffe.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_twenty_six"],
            ElementCategory::Mep.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_thirty_one"],
            ElementCategory::Sitework.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["oc_clf_omni_na", "oc_omni_nd", "oc_csi_thirty_three"],
            ElementCategory::Mep.as_str(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CLF_OMNI, CSI_MASTERFORMAT, NAME, OMNICLASS, QUESTION};
    use crate::predicates::elements;
    use crate::table::Value;

    fn oneclick_table(omniclass: &str, question: &str, csi: f64, name: &str) -> Table {
        let mut t = Table::new(vec![
            CLF_OMNI.to_string(),
            OMNICLASS.to_string(),
            QUESTION.to_string(),
            CSI_MASTERFORMAT.to_string(),
            NAME.to_string(),
        ]);
        t.push_row(vec![
            Value::Null,
            Value::str(omniclass),
            Value::str(question),
            Value::Num(csi),
            Value::str(name),
        ])
        .unwrap();
        t
    }

    fn omni(table: &Table) -> &str {
        table.value(0, CLF_OMNI).unwrap().as_str().unwrap()
    }

    #[test]
    fn test_shell_super_other_structures_narrowing() {
        let mut t = oneclick_table(
            "21-02 10 10",
            "Other structures and materials",
            9.0,
            "Gypsum board",
        );
        let registry = elements::oneclick_registry(&t).unwrap();
        OmniClassShellSuperstructure(CLF_OMNI.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(omni(&t), ElementCategory::InteriorFinishes.as_str());
    }

    #[test]
    fn test_csi_division_overrides_mapped_value() {
        let mut t = oneclick_table("21-02 10 10", "Other structures and materials", 31.0, "Gravel");
        t.set_column(CLF_OMNI, Value::str("Shell - Superstructure"));
        let registry = elements::oneclick_registry(&t).unwrap();
        CSIDivision(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(omni(&t), ElementCategory::Sitework.as_str());
    }

    #[test]
    fn test_not_defined_timber_ends_superstructure() {
        // Within the not-defined chain the enclosure write for timber is
        // followed by a second timber write to superstructure.
        let mut t = oneclick_table("Not defined", "Not included", 6.0, "Timber beams");
        let registry = elements::oneclick_registry(&t).unwrap();
        OmniClassNotDefined(CLF_OMNI.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(omni(&t), ElementCategory::Superstructure.as_str());
    }
}
