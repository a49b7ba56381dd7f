use dtomap::{map_into, Mappable};
use std::rc::Rc;
use std::sync::Arc;

#[derive(Mappable, Clone)]
struct Request {
  #[tags(dto = "boxed")]
  boxed: Option<Box<i32>>,
  #[tags(dto = "missing")]
  missing: Option<Box<i32>>,
  #[tags(dto = "shared")]
  shared: Rc<String>,
  #[tags(dto = "chain")]
  chain: Box<Option<Box<String>>>,
  #[tags(dto = "atomic")]
  atomic: Option<Arc<Vec<u8>>>,
  #[tags(dto = "plain")]
  plain: Option<i32>,
}

#[derive(Mappable, Default)]
struct Dto {
  pub Boxed: Option<Box<i32>>,
  pub Missing: Option<Box<i32>>,
  pub Shared: Rc<String>,
  pub Chain: Box<Option<Box<String>>>,
  pub Atomic: Option<Arc<Vec<u8>>>,
  pub Plain: Option<i32>,
}

fn request() -> Request {
  Request {
    boxed: Some(Box::new(5)),
    missing: None,
    shared: Rc::new("shared".to_string()),
    chain: Box::new(Some(Box::new("chain".to_string()))),
    atomic: Some(Arc::new(vec![1, 2, 3])),
    plain: None,
  }
}

#[test]
fn test_pointer_values() {
  let request = request();
  let mut dto = Dto {
    Missing: Some(Box::new(1)),
    Plain: Some(1),
    ..Dto::default()
  };
  map_into!(&mut dto, &request).unwrap();

  assert_eq!(dto.Boxed.as_deref(), Some(&5));
  assert_eq!(*dto.Shared, "shared");
  assert_eq!(dto.Chain.as_deref().map(String::as_str), Some("chain"));
  assert_eq!(dto.Atomic.as_deref(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_null_pointer_copied() {
  let request = request();
  let mut dto = Dto {
    Missing: Some(Box::new(1)),
    Plain: Some(1),
    ..Dto::default()
  };
  map_into!(&mut dto, &request).unwrap();

  assert_eq!(dto.Missing, None);
  assert_eq!(dto.Plain, None);
}

#[test]
fn test_pointees_are_copied() {
  let request = request();
  let mut dto = Dto::default();
  map_into!(&mut dto, &request).unwrap();

  assert_eq!(Rc::strong_count(&request.shared), 1);
  assert!(!Rc::ptr_eq(&request.shared, &dto.Shared));

  let src = request.atomic.as_ref().unwrap();
  let dst = dto.Atomic.as_ref().unwrap();
  assert!(!Arc::ptr_eq(src, dst));

  let src: &String = (*request.chain).as_ref().unwrap();
  let dst: &String = (*dto.Chain).as_ref().unwrap();
  assert!(!std::ptr::eq(src, dst));
}

#[test]
fn test_source_untouched() {
  let request = request();
  let before = request.clone();
  let mut dto = Dto::default();
  map_into!(&mut dto, &request).unwrap();

  assert_eq!(request.boxed, before.boxed);
  assert_eq!(request.shared, before.shared);
  assert_eq!(request.chain, before.chain);
}

#[test]
fn test_unsized_pointees() {
  #[derive(Mappable)]
  struct Upload {
    #[tags(dto = "name")]
    name: Arc<str>,
    #[tags(dto = "body")]
    body: Box<[u8]>,
    #[tags(dto = "label")]
    label: Option<Box<str>>,
  }

  #[derive(Mappable)]
  struct Stored {
    pub Name: Arc<str>,
    pub Body: Box<[u8]>,
    pub Label: Option<Box<str>>,
  }

  let upload = Upload {
    name: Arc::from("report.pdf"),
    body: vec![1, 2, 3].into_boxed_slice(),
    label: Some("draft".into()),
  };
  let mut stored = Stored {
    Name: Arc::from(""),
    Body: Box::default(),
    Label: None,
  };
  map_into!(&mut stored, &upload).unwrap();

  assert_eq!(&*stored.Name, "report.pdf");
  assert!(Arc::ptr_eq(&upload.name, &stored.Name));
  assert_eq!(&*stored.Body, &[1u8, 2, 3][..]);
  assert_eq!(stored.Label.as_deref(), Some("draft"));
}
