use folio_types::ResourceDescriptor;
use serde_json::{Number, Value};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a descriptor's canonical form, identity stripped.
///
/// The descriptor enum is externally tagged, so two resources of different kinds never
/// share a key even when their fields serialize alike. `-0.0` is folded into `0.0` before
/// hashing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey([u8; 32]);

impl ContentKey {
    pub fn of(descriptor: &ResourceDescriptor) -> Result<Self, serde_json::Error> {
        let mut value = serde_json::to_value(descriptor.without_id())?;
        fold_negative_zero(&mut value);
        let canonical = serde_json::to_vec(&value)?;
        let digest = Sha256::digest(&canonical);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

fn fold_negative_zero(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if n.as_f64().is_some_and(|f| f == 0.0 && f.is_sign_negative())
                && let Some(zero) = Number::from_f64(0.0)
            {
                *n = zero;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(fold_negative_zero),
        Value::Object(fields) => fields.values_mut().for_each(fold_negative_zero),
        _ => {}
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{
        DrawParamDescriptor, FontDescriptor, ObjectId, PathCommand, VectorShapeDescriptor,
    };

    #[test]
    fn test_identity_does_not_change_key() {
        let mut a = FontDescriptor {
            font_name: "Serif".to_string(),
            ..Default::default()
        };
        let k1 = ContentKey::of(&a.clone().into()).unwrap();
        a.id = Some(ObjectId::new(42));
        let k2 = ContentKey::of(&a.into()).unwrap();
        assert_eq!(k1, k2);
        assert_eq!(k1.to_string().len(), 64);
    }

    #[test]
    fn test_content_changes_key() {
        let a = DrawParamDescriptor::default();
        let b = DrawParamDescriptor {
            line_width: 1.0,
            ..Default::default()
        };
        assert_ne!(
            ContentKey::of(&a.into()).unwrap(),
            ContentKey::of(&b.into()).unwrap()
        );
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let shape = |x: f64| VectorShapeDescriptor {
            id: None,
            width: 10.0,
            height: 10.0,
            thumbnail: None,
            draw_param: None,
            content: vec![
                PathCommand::MoveTo { x, y: 0.0 },
                PathCommand::LineTo { x: 10.0, y: 10.0 },
            ],
        };
        assert_eq!(
            ContentKey::of(&shape(-0.0).into()).unwrap(),
            ContentKey::of(&shape(0.0).into()).unwrap()
        );

        let param = |offset: f64| DrawParamDescriptor {
            dash_offset: Some(offset),
            ..Default::default()
        };
        assert_eq!(
            ContentKey::of(&param(-0.0).into()).unwrap(),
            ContentKey::of(&param(0.0).into()).unwrap()
        );
        assert_ne!(
            ContentKey::of(&param(-1.0).into()).unwrap(),
            ContentKey::of(&param(1.0).into()).unwrap()
        );
    }
}
