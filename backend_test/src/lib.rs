use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn, Pat, Signature, Type};

/// Transform an asynchronous test into a synchronous one and inject a
/// [`rocket::local::asynchronous::Client`] built over a fresh election
/// engine.
///
/// The wrapped function must have the signature
/// `async fn name(client_ident: Client)`; the client is produced by
/// `crate::test_client()`, so every test gets its own server and engine.
#[proc_macro_attribute]
pub fn backend_test(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    if !args.is_empty() {
        return syn::Error::new(item_fn.sig.span(), "`backend_test` takes no arguments")
            .into_compile_error()
            .into();
    }

    // Reject invalid function signatures.
    if let Err(err) = check_sig(&item_fn.sig) {
        return err.into_compile_error().into();
    }

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    quote! {
        #[test]
        fn #name() {
            /// The test itself.
            #item_fn

            let runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("rocket-worker-test-thread")
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let client = crate::test_client().await;
                #new_name(client).await;
            });
        }
    }
    .into()
}

/// Ensure the wrapped test is async and takes exactly the injected client.
fn check_sig(sig: &Signature) -> Result<(), syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut inputs = sig.inputs.iter();
    match (inputs.next(), inputs.next()) {
        (Some(FnArg::Typed(pat_type)), None) => {
            let is_ident = matches!(&*pat_type.pat, Pat::Ident(_));
            let is_client = matches!(
                &*pat_type.ty,
                Type::Path(type_path)
                    if type_path
                        .path
                        .segments
                        .last()
                        .map(|segment| segment.ident == "Client")
                        .unwrap_or(false)
            );
            if is_ident && is_client {
                Ok(())
            } else {
                Err(syn::Error::new(
                    pat_type.span(),
                    "Expected `client_ident: Client`",
                ))
            }
        }
        _ => Err(syn::Error::new(
            sig.span(),
            "Expected exactly one `client_ident: Client` parameter",
        )),
    }
}
